//! Tag catalog extraction.

use indexmap::IndexSet;

use crate::case::Case;

/// Collect the deduplicated set of tags across all cases.
///
/// Order of first appearance is preserved, which is what the filter
/// dropdown renders.
pub fn collect_tags(cases: &[Case]) -> Vec<String> {
    let set: IndexSet<&str> = cases
        .iter()
        .flat_map(|c| c.tags.iter().map(String::as_str))
        .collect();

    set.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::CaseStatus;

    fn case(id: i64, tags: &[&str]) -> Case {
        Case {
            id,
            name: format!("Case {id}"),
            description: None,
            summary: None,
            summary_url: None,
            report_time: chrono::Utc::now(),
            status: CaseStatus::Active,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            offices: vec![],
            officers: None,
            officer_name: None,
            officer_avatar: None,
            department: None,
        }
    }

    #[test]
    fn deduplicates_preserving_first_appearance() {
        let cases = vec![
            case(1, &["Casualties", "Violent"]),
            case(2, &["Narcotics", "Casualties"]),
            case(3, &["Violent"]),
        ];
        assert_eq!(
            collect_tags(&cases),
            vec!["Casualties", "Violent", "Narcotics"]
        );
    }

    #[test]
    fn empty_collection_yields_no_tags() {
        assert!(collect_tags(&[]).is_empty());
    }
}
