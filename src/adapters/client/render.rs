//! Display helpers shared by the screens.

use crate::domain::foundation::{PageMeta, Percentage};
use crate::domain::kriteria::Jalur;
use crate::domain::moora::SkorJalur;
use crate::domain::periode::{ActivationDirection, Periode};

/// One bar of the result chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBar {
    pub label: &'static str,
    pub score: f64,
    pub width: Percentage,
    pub highlighted: bool,
}

/// Bars in alternative order; the recommended pathway is highlighted.
/// Widths are clamped to 0..=100 even when a score exceeds 1.
pub fn score_bars(skor: &SkorJalur) -> Vec<ScoreBar> {
    let best = skor.best();
    Jalur::ALL
        .into_iter()
        .map(|jalur| {
            let score = skor.get(jalur);
            ScoreBar {
                label: jalur.label(),
                score,
                width: Percentage::from_score(score),
                highlighted: jalur == best,
            }
        })
        .collect()
}

/// Pagination controls are hidden for single-page lists.
pub fn show_pagination(meta: &PageMeta) -> bool {
    meta.shows_controls()
}

/// Confirmation dialog text for activating `target` while `active` is the
/// current period.
pub fn activation_confirmation(target: &Periode, active: Option<&Periode>) -> String {
    ActivationDirection::between(target, active).confirmation(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::PeriodeId;

    fn periode(id: i64, urutan: i32, is_active: bool) -> Periode {
        Periode {
            id: PeriodeId::new(id),
            nama_periode: format!("2024/2025 Semester {}", urutan),
            urutan,
            is_active,
        }
    }

    #[test]
    fn score_above_one_renders_full_width() {
        let bars = score_bars(&SkorJalur {
            studi: 1.2,
            kerja: 0.4,
            wirausaha: -0.1,
        });
        assert_eq!(bars[0].width, Percentage::HUNDRED);
        assert!(bars[0].highlighted);
        assert!((bars[1].width.value() - 40.0).abs() < 1e-9);
        assert_eq!(bars[2].width, Percentage::ZERO);
        assert_eq!(bars[2].label, Jalur::Wirausaha.label());
    }

    #[test]
    fn pagination_hidden_for_one_page() {
        let one = PageMeta {
            current_page: 1,
            last_page: 1,
            total: 3,
        };
        let many = PageMeta {
            last_page: 2,
            ..one
        };
        assert!(!show_pagination(&one));
        assert!(show_pagination(&many));
    }

    #[test]
    fn forward_activation_warns_about_promotion() {
        let text = activation_confirmation(&periode(2, 2, false), Some(&periode(1, 1, true)));
        assert!(text.contains("naik kelas"));
    }

    #[test]
    fn backward_activation_is_review_only() {
        let text = activation_confirmation(&periode(1, 1, false), Some(&periode(2, 2, true)));
        assert!(text.contains("peninjauan"));
    }

    #[test]
    fn first_activation_says_so() {
        let text = activation_confirmation(&periode(1, 1, false), None);
        assert!(text.contains("pertama"));
    }
}
