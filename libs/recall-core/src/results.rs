//! Study session results.

use serde::{Deserialize, Serialize};

use crate::types::WordEntry;

/// Read-only outcome of a study session.
///
/// Every target word is in exactly one of `remembered` and `missed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsSummary {
    pub list_name: String,
    pub total_words: usize,
    /// In first-success order.
    pub remembered: Vec<WordEntry>,
    pub missed: Vec<WordEntry>,
    /// Distinct incorrect submissions in first-occurrence order.
    pub incorrect: Vec<String>,
}

impl ResultsSummary {
    /// Percentage of target words remembered, rounded half up.
    pub fn score(&self) -> u32 {
        if self.total_words == 0 {
            return 0;
        }
        let remembered = self.remembered.len() as u64;
        let total = self.total_words as u64;
        ((200 * remembered + total) / (2 * total)) as u32
    }

    /// Copy with every section sorted alphabetically for display.
    pub fn sorted_for_display(&self) -> Self {
        let mut sorted = self.clone();
        sorted.remembered.sort_by(|a, b| a.word.cmp(&b.word));
        sorted.missed.sort_by(|a, b| a.word.cmp(&b.word));
        sorted.incorrect.sort();
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn summary(remembered: usize, total: usize) -> ResultsSummary {
        ResultsSummary {
            list_name: "List".to_string(),
            total_words: total,
            remembered: (0..remembered)
                .map(|i| WordEntry::new(format!("W{i}"), None))
                .collect(),
            missed: (remembered..total)
                .map(|i| WordEntry::new(format!("W{i}"), None))
                .collect(),
            incorrect: vec![],
        }
    }

    #[test]
    fn score_half() {
        assert_eq!(summary(1, 2).score(), 50);
    }

    #[test]
    fn score_rounds_half_up() {
        // 1/8 = 12.5%, 5/8 = 62.5%
        assert_eq!(summary(1, 8).score(), 13);
        assert_eq!(summary(5, 8).score(), 63);
    }

    #[test]
    fn score_rounds_to_nearest() {
        // 1/3 = 33.3%, 2/3 = 66.7%
        assert_eq!(summary(1, 3).score(), 33);
        assert_eq!(summary(2, 3).score(), 67);
    }

    #[test]
    fn score_bounds() {
        assert_eq!(summary(0, 4).score(), 0);
        assert_eq!(summary(4, 4).score(), 100);
        assert_eq!(summary(0, 0).score(), 0);
    }

    #[test]
    fn sorted_for_display_orders_sections() {
        let results = ResultsSummary {
            list_name: "List".to_string(),
            total_words: 4,
            remembered: vec![WordEntry::new("ZA", None), WordEntry::new("AA", None)],
            missed: vec![WordEntry::new("QI", None), WordEntry::new("AB", None)],
            incorrect: vec!["ZZ".to_string(), "BB".to_string()],
        };

        let sorted = results.sorted_for_display();
        assert_eq!(sorted.remembered[0].word, "AA");
        assert_eq!(sorted.missed[0].word, "AB");
        assert_eq!(sorted.incorrect, vec!["BB".to_string(), "ZZ".to_string()]);
        assert_eq!(results.remembered[0].word, "ZA");
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(summary(1, 2)).unwrap();
        assert_eq!(json["listName"], "List");
        assert_eq!(json["totalWords"], 2);
        assert_eq!(json["remembered"][0]["word"], "W0");
        assert!(json["remembered"][0]["definition"].is_null());
    }
}
