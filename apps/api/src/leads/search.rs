//! Client-side lead search: case-insensitive substring match, no I/O.

use crate::models::Lead;

/// Returns the leads matching `term`, preserving input order.
///
/// A lead matches when its full name, company, title or email contains the
/// term, ignoring case. An empty term matches everything.
pub fn search<'a>(leads: &'a [Lead], term: &str) -> Vec<&'a Lead> {
    if term.is_empty() {
        return leads.iter().collect();
    }

    let needle = term.to_lowercase();
    leads.iter().filter(|lead| matches(lead, &needle)).collect()
}

/// `needle` must already be lowercase.
fn matches(lead: &Lead, needle: &str) -> bool {
    let contains = |field: &Option<String>| {
        field
            .as_deref()
            .is_some_and(|v| v.to_lowercase().contains(needle))
    };

    format!("{} {}", lead.first_name(), lead.last_name())
        .to_lowercase()
        .contains(needle)
        || contains(&lead.company_name)
        || contains(&lead.title)
        || contains(&lead.email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(first: &str, last: &str, company: &str, title: &str, email: &str) -> Lead {
        Lead {
            first_name: Some(first.into()),
            last_name: Some(last.into()),
            company_name: Some(company.into()),
            title: Some(title.into()),
            email: Some(email.into()),
            ..Default::default()
        }
    }

    fn fixture() -> Vec<Lead> {
        vec![
            lead("Ada", "Lovelace", "Analytic", "Engineer", "ada@analytic.io"),
            lead("Grace", "Hopper", "Navy", "Rear Admiral", "grace@navy.mil"),
            lead("Alan", "Turing", "Bletchley", "Cryptanalyst", "alan@bletchley.uk"),
        ]
    }

    #[test]
    fn test_empty_term_returns_everything_in_order() {
        let leads = fixture();
        let found = search(&leads, "");
        assert_eq!(found.len(), 3);
        for (found, original) in found.iter().zip(&leads) {
            assert_eq!(*found, original);
        }
    }

    #[test]
    fn test_matches_full_name_across_the_space() {
        let leads = fixture();
        let found = search(&leads, "ada love");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].first_name(), "Ada");
    }

    #[test]
    fn test_case_insensitive_company_match() {
        let leads = fixture();
        let found = search(&leads, "NAVY");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].first_name(), "Grace");
    }

    #[test]
    fn test_matches_title_and_email() {
        let leads = fixture();
        assert_eq!(search(&leads, "cryptan").len(), 1);
        assert_eq!(search(&leads, "@analytic").len(), 1);
    }

    #[test]
    fn test_or_across_fields_preserves_order() {
        let leads = fixture();
        // Nothing on Grace's row contains "an".
        let found: Vec<&str> = search(&leads, "an").iter().map(|l| l.first_name()).collect();
        assert_eq!(found, vec!["Ada", "Alan"]);
    }

    #[test]
    fn test_fields_outside_the_search_set_are_ignored() {
        let mut leads = fixture();
        leads[0].city = Some("London".into());
        assert!(search(&leads, "london").is_empty());
    }

    #[test]
    fn test_missing_fields_never_match() {
        let leads = vec![Lead::default()];
        assert!(search(&leads, "x").is_empty());
        assert_eq!(search(&leads, "").len(), 1);
    }

    #[test]
    fn test_every_result_contains_the_term() {
        let leads = fixture();
        for term in ["a", "e", "io", "HOP", "zz"] {
            let needle = term.to_lowercase();
            for lead in search(&leads, term) {
                let haystacks = [
                    lead.full_name(),
                    lead.company_name.clone().unwrap_or_default(),
                    lead.title.clone().unwrap_or_default(),
                    lead.email.clone().unwrap_or_default(),
                ];
                assert!(haystacks.iter().any(|h| h.to_lowercase().contains(&needle)));
            }
        }
    }
}
