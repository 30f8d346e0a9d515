use crate::models::duty_category::DutyCategory;

pub struct ClassifyLogic;

impl ClassifyLogic {
    /// Pair every raw label with the row it lands in.
    pub fn classify<'a>(labels: &'a [String]) -> Vec<(&'a str, DutyCategory)> {
        labels
            .iter()
            .map(|l| (l.as_str(), DutyCategory::normalize(l)))
            .collect()
    }

    pub fn print(labels: &[String]) {
        let width = labels.iter().map(|l| l.len() + 2).max().unwrap_or(0);

        for (label, category) in Self::classify(labels) {
            let quoted = format!("\"{label}\"");
            println!("{quoted:<width$} → {category}");
        }
    }
}
