//! Contact records and name ordering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Which name component sorts first. The string forms are the order
/// filter values the contacts endpoint understands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameOrder {
    #[default]
    FirstLast,
    LastFirst,
}

impl NameOrder {
    pub const ALL: [NameOrder; 2] = [NameOrder::FirstLast, NameOrder::LastFirst];

    pub fn as_str(self) -> &'static str {
        match self {
            NameOrder::FirstLast => "first,last",
            NameOrder::LastFirst => "last,first",
        }
    }
}

impl fmt::Display for NameOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NameOrder {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "first,last" => Ok(NameOrder::FirstLast),
            "last,first" => Ok(NameOrder::LastFirst),
            other => Err(CoreError::UnknownNameOrder(other.to_owned())),
        }
    }
}

/// "First Last", whichever parts are present.
pub fn display_name(contact: &Contact) -> String {
    let mut parts = Vec::new();
    if let Some(first) = contact.first_name.as_deref().filter(|s| !s.is_empty()) {
        parts.push(first);
    }
    if let Some(last) = contact.last_name.as_deref().filter(|s| !s.is_empty()) {
        parts.push(last);
    }
    parts.join(" ")
}

/// Stable, case-insensitive sort on the chosen (primary, secondary) name
/// pair. The original app delegated ordering to the server; here it is a
/// plain client-side sort.
pub fn sort_contacts(contacts: &mut [Contact], order: NameOrder) {
    let key = |contact: &Contact| {
        let first = contact
            .first_name
            .as_deref()
            .unwrap_or_default()
            .to_lowercase();
        let last = contact
            .last_name
            .as_deref()
            .unwrap_or_default()
            .to_lowercase();
        match order {
            NameOrder::FirstLast => (first, last),
            NameOrder::LastFirst => (last, first),
        }
    };
    contacts.sort_by_key(key);
}

/// Sorted display names, one per contact, nameless entries dropped.
pub fn contact_lines(contacts: &[Contact], order: NameOrder) -> Vec<String> {
    let mut sorted = contacts.to_vec();
    sort_contacts(&mut sorted, order);
    sorted
        .iter()
        .map(display_name)
        .filter(|name| !name.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(first: Option<&str>, last: Option<&str>) -> Contact {
        Contact {
            first_name: first.map(str::to_owned),
            last_name: last.map(str::to_owned),
        }
    }

    #[test]
    fn order_parsing() {
        assert_eq!("first,last".parse::<NameOrder>().unwrap(), NameOrder::FirstLast);
        assert_eq!("last,first".parse::<NameOrder>().unwrap(), NameOrder::LastFirst);
        assert_eq!(" first,last ".parse::<NameOrder>().unwrap(), NameOrder::FirstLast);
        assert!(matches!(
            "last;first".parse::<NameOrder>(),
            Err(CoreError::UnknownNameOrder(_))
        ));
        assert_eq!(NameOrder::LastFirst.to_string(), "last,first");
    }

    #[test]
    fn display_names() {
        assert_eq!(display_name(&contact(Some("Ada"), Some("Lovelace"))), "Ada Lovelace");
        assert_eq!(display_name(&contact(Some("Ada"), None)), "Ada");
        assert_eq!(display_name(&contact(None, Some("Lovelace"))), "Lovelace");
        assert_eq!(display_name(&contact(None, None)), "");
        assert_eq!(display_name(&contact(Some(""), Some("Lovelace"))), "Lovelace");
    }

    #[test]
    fn sorting_by_either_order() {
        let contacts = vec![
            contact(Some("Grace"), Some("Hopper")),
            contact(Some("ada"), Some("Lovelace")),
            contact(Some("Alan"), Some("turing")),
        ];

        let first_last = contact_lines(&contacts, NameOrder::FirstLast);
        assert_eq!(first_last, vec!["ada Lovelace", "Alan turing", "Grace Hopper"]);

        let last_first = contact_lines(&contacts, NameOrder::LastFirst);
        assert_eq!(last_first, vec!["Grace Hopper", "ada Lovelace", "Alan turing"]);
    }

    #[test]
    fn nameless_contacts_are_dropped_from_lines() {
        let contacts = vec![contact(None, None), contact(Some("Ada"), None)];
        assert_eq!(contact_lines(&contacts, NameOrder::FirstLast), vec!["Ada"]);
    }

    #[test]
    fn parses_from_contact_dump_json() {
        let contacts: Vec<Contact> = serde_json::from_str(
            r#"[{"firstName": "Ada", "lastName": "Lovelace", "phones": []}]"#,
        )
        .unwrap();
        assert_eq!(contacts[0], contact(Some("Ada"), Some("Lovelace")));
    }
}
