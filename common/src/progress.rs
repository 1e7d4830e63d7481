//! 事件情報の入力進捗

use crate::types::Metadata;

/// 入力済み欄の数（前後空白は無視）
pub fn filled_count(meta: &Metadata) -> usize {
    meta.values()
        .iter()
        .filter(|v| !v.trim().is_empty())
        .count()
}

/// 入力進捗（0〜100の整数パーセント、四捨五入）
pub fn completion_percent(meta: &Metadata) -> u8 {
    let total = Metadata::FIELDS.len();
    let percent = (filled_count(meta) as f64 / total as f64 * 100.0).round();
    percent as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(completion_percent(&Metadata::default()), 0);
    }

    #[test]
    fn test_whitespace_does_not_count() {
        let meta = Metadata {
            event_name: "   ".into(),
            reporter: "\t".into(),
            ..Default::default()
        };
        assert_eq!(filled_count(&meta), 0);
    }

    #[test]
    fn test_monotonic_fill() {
        let mut meta = Metadata::default();
        let mut prev = completion_percent(&meta);
        let mut seen = vec![prev];
        for field in Metadata::FIELDS {
            meta.set(field, "x");
            let now = completion_percent(&meta);
            assert!(now >= prev);
            prev = now;
            seen.push(now);
        }
        assert_eq!(seen, vec![0, 25, 50, 75, 100]);
    }
}
