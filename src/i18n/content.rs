//! Shape of a translation bundle (`locales/<code>/content.json`).
//!
//! Field names follow the JSON documents, which use camelCase. Optional image
//! and color fields may be left out of a bundle entirely.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TranslationContent {
    pub meta: Meta,
    pub hero: Hero,
    pub navigation: Navigation,
    pub story: Story,
    pub event: Event,
    pub gallery: Gallery,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party: Option<Party>,
    pub rsvp: Rsvp,
    pub registry: Registry,
    pub faq: Faq,
    pub footer: Footer,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Meta {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub names: String,
    pub date: String,
    pub location: String,
    /// Greeting for a personalized visit; `{name}` is replaced by the guest
    /// names. Bundles without it get the plain English greeting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greeting: Option<String>,
    pub countdown: CountdownLabels,
    pub scroll_cta: String,
    pub background_color: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountdownLabels {
    pub days: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Navigation {
    pub story: String,
    pub event: String,
    pub gallery: String,
    pub rsvp: String,
    pub registry: String,
    pub faq: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Story {
    pub title: String,
    pub subtitle: String,
    pub timeline: Vec<TimelineEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub year: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub title: String,
    pub subtitle: String,
    pub ceremony: Venue,
    pub reception: Venue,
    pub map_url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub title: String,
    pub date: String,
    pub time: String,
    pub address: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Gallery {
    pub title: String,
    pub subtitle: String,
    pub photos: Vec<Photo>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    pub alt: String,
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

/// Wedding party bios. Optional: a bundle may leave the whole section out.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Party {
    pub title: String,
    pub subtitle: String,
    pub bridesmaids: PartyGroup,
    pub groomsmen: PartyGroup,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PartyGroup {
    pub title: String,
    pub members: Vec<PartyMember>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyMember {
    pub name: String,
    pub role: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
    pub title: String,
    pub subtitle: String,
    pub deadline: String,
    pub form: RsvpFormLabels,
    pub confirmation: RsvpConfirmation,
    pub background_color: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RsvpFormLabels {
    pub name: FieldLabel,
    pub email: FieldLabel,
    pub attending: AttendingLabel,
    pub guests: FieldLabel,
    pub dietary: FieldLabel,
    pub message: FieldLabel,
    pub submit: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldLabel {
    pub label: String,
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AttendingLabel {
    pub label: String,
    pub options: AttendingOptions,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AttendingOptions {
    pub yes: String,
    pub no: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RsvpConfirmation {
    pub success: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Registry {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<RegistryItem>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryItem {
    pub name: String,
    pub description: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub title: String,
    pub subtitle: String,
    pub questions: Vec<Question>,
    pub contact: Contact,
    pub background_color: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Question {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Contact {
    pub title: String,
    pub message: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Footer {
    pub message: String,
    pub names: String,
    pub date: String,
    pub copyright: String,
    pub social: Social,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Social {
    pub instagram: String,
    pub facebook: String,
}

impl Hero {
    /// The greeting shown to a guest arriving through an invitation link.
    pub fn greeting_for(&self, guest_names: &str) -> String {
        match &self.greeting {
            Some(template) => template.replace("{name}", guest_names),
            None => format!("Welcome, {}!", guest_names),
        }
    }
}
