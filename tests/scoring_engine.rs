//! Tests for the public scoring API: metrics, engine, ranker.

use domain_similarity::metric::{edit_distance_score, jaccard, sequence_ratio};
use domain_similarity::{rank, score_all, Metric, ScoringError, Threshold};

const WATCHLIST: &[&str] = &["paypal", "amazon", "microsoft", "bank"];

const CANDIDATES: &[&str] = &[
    "paypa1.com",
    "arnazon.net",
    "rnicrosoft.org",
    "bank.com",
    "weather-today.info",
    "q.io",
    "bankk.xyz",
    "paypal-login.top",
];

#[test]
fn test_identity_laws() {
    for s in ["paypal", "a", "xn--pypal-4ve", "microsoft"] {
        assert_eq!(sequence_ratio(s, s), 1.0);
        assert_eq!(jaccard(s, s), 1.0);
        assert_eq!(edit_distance_score(s, s), 100.0);
    }
}

#[test]
fn test_empty_jaccard_defined() {
    assert_eq!(jaccard("", ""), 0.0);
}

#[test]
fn test_symmetry_laws() {
    let pairs = [
        ("paypa1", "paypal"),
        ("arnazon", "amazon"),
        ("bankk", "bank"),
    ];
    for (a, b) in pairs {
        assert_eq!(jaccard(a, b), jaccard(b, a));
        assert_eq!(sequence_ratio(a, b), sequence_ratio(b, a));
    }
}

#[test]
fn test_threshold_law_all_metrics() {
    for metric in [Metric::SequenceRatio, Metric::EditDistance, Metric::Jaccard] {
        let result = score_all(metric, Threshold::Legacy, WATCHLIST, CANDIDATES);
        for candidate in CANDIDATES {
            let label = domain_similarity::domain::label(candidate);
            let best = WATCHLIST
                .iter()
                .map(|w| metric.score(label, w))
                .fold(0.0_f64, f64::max);
            let present = result.iter().find(|r| r.domain == *candidate);
            match present {
                Some(r) => {
                    assert!(best >= 0.5, "{metric}: {candidate} kept with {best}");
                    assert_eq!(r.score, best);
                }
                None => assert!(best < 0.5, "{metric}: {candidate} dropped with {best}"),
            }
        }
    }
}

#[test]
fn test_ranking_law_all_metrics() {
    for metric in [Metric::SequenceRatio, Metric::EditDistance, Metric::Jaccard] {
        let ranked = rank(score_all(metric, Threshold::Legacy, WATCHLIST, CANDIDATES));
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score, "{metric}: {:?}", pair);
            if pair[0].score == pair[1].score {
                let i = CANDIDATES.iter().position(|c| *c == pair[0].domain);
                let j = CANDIDATES.iter().position(|c| *c == pair[1].domain);
                assert!(i < j, "{metric}: tie order broken for {:?}", pair);
            }
        }
    }
}

#[test]
fn test_exact_label_ranks_first() {
    let ranked = rank(score_all(
        Metric::SequenceRatio,
        Threshold::Legacy,
        WATCHLIST,
        CANDIDATES,
    ));
    assert_eq!(ranked[0].domain, "bank.com");
    assert_eq!(ranked[0].score, 1.0);
}

#[test]
fn test_metric_threshold_narrows_edit_distance() {
    let legacy = score_all(Metric::EditDistance, Threshold::Legacy, WATCHLIST, CANDIDATES);
    let tuned = score_all(
        Metric::EditDistance,
        Threshold::MetricDefault,
        WATCHLIST,
        CANDIDATES,
    );
    // Legacy mode keeps everything with a positive best score
    assert_eq!(legacy.len(), CANDIDATES.len());
    let tuned: Vec<&str> = tuned.iter().map(|r| r.domain.as_str()).collect();
    assert_eq!(
        tuned,
        vec![
            "paypa1.com",
            "arnazon.net",
            "rnicrosoft.org",
            "bank.com",
            "bankk.xyz"
        ]
    );
}

#[test]
fn test_unknown_metric_rejected() {
    let err = "levenshtein".parse::<Metric>().unwrap_err();
    assert!(matches!(err, ScoringError::InvalidConfiguration(_)));
}
