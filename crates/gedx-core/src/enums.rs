//! Change vocabularies.
//!
//! Each enum is declared through [`uri_enum!`](crate::codec) and serializes
//! as its canonical URI. Records store the raw [`Uri`](crate::uri::Uri) and
//! expose typed views through [`Term`](crate::codec::Term), so values outside
//! these tables are still carried.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::codec::uri_enum;

// ---------------------------------------------------------------------------
// ChangeOperation
// ---------------------------------------------------------------------------

uri_enum! {
    /// The operation a change applied.
    pub enum ChangeOperation in "change-operation" {
        Create => (gedcomx, "Create"),
        Read => (gedcomx, "Read"),
        Update => (gedcomx, "Update"),
        Delete => (gedcomx, "Delete"),
        Merge => (gedcomx, "Merge"),
        Unmerge => (gedcomx, "Unmerge"),
        Restore => (gedcomx, "Restore"),
    }
}

// ---------------------------------------------------------------------------
// ChangeObjectType
// ---------------------------------------------------------------------------

uri_enum! {
    /// The kind of object a change applied to.
    pub enum ChangeObjectType in "change-object-type" {
        // Subjects and relationships
        Person => (gedcomx, "Person"),
        Couple => (gedcomx, "Couple"),
        ChildAndParentsRelationship => (familysearch, "ChildAndParentsRelationship"),
        Spouse1 => (gedcomx, "Spouse1"),
        Spouse2 => (gedcomx, "Spouse2"),
        Father => (gedcomx, "Father"),
        Mother => (gedcomx, "Mother"),
        Child => (gedcomx, "Child"),
        // Names
        BirthName => (gedcomx, "BirthName"),
        AlsoKnownAs => (gedcomx, "AlsoKnownAs"),
        MarriedName => (gedcomx, "MarriedName"),
        Nickname => (gedcomx, "Nickname"),
        // Facts
        Gender => (gedcomx, "Gender"),
        Birth => (gedcomx, "Birth"),
        Christening => (gedcomx, "Christening"),
        Death => (gedcomx, "Death"),
        Burial => (gedcomx, "Burial"),
        Cremation => (gedcomx, "Cremation"),
        Caste => (gedcomx, "Caste"),
        Clan => (gedcomx, "Clan"),
        NationalId => (gedcomx, "NationalId"),
        Nationality => (gedcomx, "Nationality"),
        PhysicalDescription => (gedcomx, "PhysicalDescription"),
        Race => (gedcomx, "Race"),
        Religion => (gedcomx, "Religion"),
        Occupation => (gedcomx, "Occupation"),
        Residence => (gedcomx, "Residence"),
        Marriage => (gedcomx, "Marriage"),
        Divorce => (gedcomx, "Divorce"),
        Annulment => (gedcomx, "Annulment"),
        CommonLawMarriage => (gedcomx, "CommonLawMarriage"),
        // Supporting material
        SourceReference => (gedcomx, "SourceReference"),
        EvidenceReference => (gedcomx, "EvidenceReference"),
        Note => (gedcomx, "Note"),
        // FamilySearch extensions
        LifeSketch => (familysearch, "LifeSketch"),
        Affiliation => (familysearch, "Affiliation"),
        TribeName => (familysearch, "TribeName"),
        BirthOrder => (familysearch, "BirthOrder"),
        TitleOfNobility => (familysearch, "TitleOfNobility"),
        NotAMatch => (familysearch, "NotAMatch"),
    }
}

// ---------------------------------------------------------------------------
// ChangeObjectModifier
// ---------------------------------------------------------------------------

uri_enum! {
    /// Qualifies the object of a change. For example, a `Fact` change may
    /// apply to a person, a couple, or a child-and-parents relationship.
    pub enum ChangeObjectModifier in "change-object-modifier" {
        Person => (gedcomx, "Person"),
        Couple => (gedcomx, "Couple"),
        ChildAndParentsRelationship => (familysearch, "ChildAndParentsRelationship"),
    }
}

// ---------------------------------------------------------------------------
// ChangeType
// ---------------------------------------------------------------------------

/// A known (operation, object type, modifier) triple used to seed a
/// [`ChangeInfo`](crate::records::ChangeInfo).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangeType {
    pub operation: ChangeOperation,
    pub object_type: ChangeObjectType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_modifier: Option<ChangeObjectModifier>,
}

impl ChangeType {
    #[must_use]
    pub const fn new(operation: ChangeOperation, object_type: ChangeObjectType) -> Self {
        Self {
            operation,
            object_type,
            object_modifier: None,
        }
    }

    #[must_use]
    pub const fn with_modifier(mut self, modifier: ChangeObjectModifier) -> Self {
        self.object_modifier = Some(modifier);
        self
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
