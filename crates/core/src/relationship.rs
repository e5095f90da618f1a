use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::patient::{Reference, ResourceRef};

/// Relationship create body for `POST /ws/rest/v1/relationship`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub person_a: Reference,
    pub person_b: Reference,
    pub relationship_type: Reference,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
}

/// Relationship as read with `v=full`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipRecord {
    pub uuid: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    pub person_a: ResourceRef,
    pub person_b: ResourceRef,
    pub relationship_type: RelationshipTypeRef,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl RelationshipRecord {
    /// The other person in the relationship, with the role they play
    /// relative to `person_uuid` (e.g. "Mother" when looking from the child)
    pub fn counterpart(&self, person_uuid: &str) -> Option<(&ResourceRef, Option<&str>)> {
        let ty = &self.relationship_type;
        if self.person_a.uuid == person_uuid {
            Some((&self.person_b, ty.b_is_to_a.as_deref()))
        } else if self.person_b.uuid == person_uuid {
            Some((&self.person_a, ty.a_is_to_b.as_deref()))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipTypeRef {
    pub uuid: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a_is_to_b: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b_is_to_a: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mother_child() -> RelationshipRecord {
        serde_json::from_value(json!({
            "uuid": "rel-1",
            "display": "Maria is the Parent of Ana",
            "personA": {"uuid": "mother", "display": "Maria", "gender": "F"},
            "personB": {"uuid": "child", "display": "Ana"},
            "relationshipType": {
                "uuid": "8d91a210-c2cc-11de-8d13-0010c6dffd0f",
                "display": "Parent/Child",
                "aIsToB": "Parent",
                "bIsToA": "Child"
            },
            "startDate": "2024-01-05T00:00:00.000+0000",
            "endDate": null
        }))
        .unwrap()
    }

    #[test]
    fn counterpart_from_either_side() {
        let rel = mother_child();

        let (other, role) = rel.counterpart("child").unwrap();
        assert_eq!(other.uuid, "mother");
        assert_eq!(role, Some("Parent"));

        let (other, role) = rel.counterpart("mother").unwrap();
        assert_eq!(other.uuid, "child");
        assert_eq!(role, Some("Child"));

        assert!(rel.counterpart("stranger").is_none());
    }

    #[test]
    fn create_body_uses_bare_uuids() {
        let rel = Relationship {
            person_a: "mother".into(),
            person_b: "child".into(),
            relationship_type: "8d91a210-c2cc-11de-8d13-0010c6dffd0f".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 5),
        };
        let body = serde_json::to_value(&rel).unwrap();
        assert_eq!(
            body,
            json!({
                "personA": "mother",
                "personB": "child",
                "relationshipType": "8d91a210-c2cc-11de-8d13-0010c6dffd0f",
                "startDate": "2024-01-05"
            })
        );
    }
}
