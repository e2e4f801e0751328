use horrorshow::{html, RenderOnce, TemplateBuffer};

use crate::countdown::Countdown;
use crate::i18n::{Language, PartyGroup, TranslationContent, Venue};
use crate::rsvp::MAX_PARTY_SIZE;
use crate::text::{initials, slugify};

pub const STYLE: &str = r#"
#hero {
    min-height: 90vh;
    max-width: none;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
}
#hero h1 {
    font-family: "Dancing Script", cursive;
    font-size: 64px;
    margin: 0;
}
#greeting {
    font-size: 28px;
    color: var(--gold);
}
#countdown {
    display: flex;
    gap: 24px;
    margin: 24px 0;
}
#countdown .value {
    font-size: 36px;
    display: block;
}
.timeline-entry, .venue, .registry-item, .party-member {
    background-color: #ffffff;
    border-radius: 12px;
    padding: 16px 20px;
    margin: 16px 0;
}
.timeline-year {
    color: var(--gold);
    font-weight: bold;
}
.grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 16px;
}
.photo img, .photo .placeholder {
    width: 100%;
    aspect-ratio: 4 / 3;
    object-fit: cover;
    border-radius: 12px;
}
.photo .placeholder, .avatar {
    display: flex;
    align-items: center;
    justify-content: center;
    background-color: var(--blush);
}
.avatar {
    width: 64px;
    height: 64px;
    border-radius: 50%;
    font-size: 22px;
}
#rsvp form {
    display: grid;
    gap: 12px;
    max-width: 520px;
    margin: 0 auto;
}
#rsvp input, #rsvp select, #rsvp textarea {
    font-size: 16px;
    padding: 8px 12px;
    border: 1px solid var(--blush);
    border-radius: 8px;
}
.notice {
    text-align: center;
    padding: 12px;
    border-radius: 8px;
}
.notice.success {
    background-color: #e3efdc;
}
.notice.error {
    background-color: #f6dcdc;
}
details {
    border-bottom: 1px solid var(--blush);
    padding: 12px 0;
}
summary {
    cursor: pointer;
    font-weight: bold;
}
"#;

/// Result of an RSVP post, shown above the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsvpNotice {
    Success,
    Error,
}

/// The one-page wedding site.
pub struct HomePage<'a> {
    pub language: Language,
    pub content: &'a TranslationContent,
    /// Names from the invitation link, already joined for display.
    pub guest_names: Option<&'a str>,
    pub countdown: Option<Countdown>,
    pub rsvp_notice: Option<RsvpNotice>,
    /// Query string of the current request, kept on the RSVP form action so a
    /// personalized visit stays personalized after posting.
    pub query: Option<&'a str>,
}

impl RenderOnce for HomePage<'_> {
    fn render_once(self, tmpl: &mut TemplateBuffer<'_>) {
        let HomePage {
            language,
            content,
            guest_names,
            countdown,
            rsvp_notice,
            query,
        } = self;

        let hero = &content.hero;
        let story = &content.story;
        let event = &content.event;
        let gallery = &content.gallery;
        let rsvp = &content.rsvp;
        let registry = &content.registry;
        let faq = &content.faq;

        let rsvp_action = match query.filter(|q| !q.is_empty()) {
            Some(q) => format!("/{}/rsvp?{}#rsvp", language.code(), q),
            None => format!("/{}/rsvp#rsvp", language.code()),
        };

        tmpl << html! {
            section(id = "hero", style = format_args!("background-color: {}", hero.background_color)) {
                h1 : &hero.names;
                p(class = "hero-date") : &hero.date;
                p(class = "hero-location") : &hero.location;
                @ if let Some(names) = guest_names {
                    h2(id = "greeting") : hero.greeting_for(names);
                }
                @ if let Some(left) = countdown {
                    div(id = "countdown") {
                        div { span(class = "value") : left.days.to_string(); : &hero.countdown.days; }
                        div { span(class = "value") : left.hours.to_string(); : &hero.countdown.hours; }
                        div { span(class = "value") : left.minutes.to_string(); : &hero.countdown.minutes; }
                        div { span(class = "value") : left.seconds.to_string(); : &hero.countdown.seconds; }
                    }
                }
                a(href = "#story") : &hero.scroll_cta;
            }

            section(id = "story") {
                h2(class = "section-title") : &story.title;
                p(class = "section-subtitle") : &story.subtitle;
                @ for entry in &story.timeline {
                    div(class = "timeline-entry", id = slugify(&format!("{} {}", entry.year, entry.title))) {
                        span(class = "timeline-year") : &entry.year;
                        h3 : &entry.title;
                        @ if let Some(src) = &entry.image {
                            img(src = src, alt = &entry.title);
                        }
                        p : &entry.description;
                    }
                }
            }

            section(id = "event") {
                h2(class = "section-title") : &event.title;
                p(class = "section-subtitle") : &event.subtitle;
                div(class = "grid") {
                    : VenueCard(&event.ceremony);
                    : VenueCard(&event.reception);
                }
                p(class = "section-title") {
                    a(href = &event.map_url, target = "_blank", rel = "noopener") : "Google Maps";
                }
            }

            section(id = "gallery") {
                h2(class = "section-title") : &gallery.title;
                p(class = "section-subtitle") : &gallery.subtitle;
                div(class = "grid") {
                    @ for photo in &gallery.photos {
                        figure(class = "photo") {
                            @ if let Some(src) = &photo.src {
                                img(src = src, alt = &photo.alt, loading = "lazy");
                            } else {
                                div(class = "placeholder", style = format_args!("background-color: {}", photo.background_color.as_deref().unwrap_or("#E8C4C4"))) : &photo.alt;
                            }
                            figcaption : &photo.caption;
                        }
                    }
                }
            }

            @ if let Some(party) = &content.party {
                section(id = "party") {
                    h2(class = "section-title") : &party.title;
                    p(class = "section-subtitle") : &party.subtitle;
                    : PartyCards(&party.bridesmaids);
                    : PartyCards(&party.groomsmen);
                }
            }

            section(id = "rsvp", style = format_args!("background-color: {}", rsvp.background_color)) {
                h2(class = "section-title") : &rsvp.title;
                p(class = "section-subtitle") : &rsvp.subtitle;
                p(class = "section-subtitle") : &rsvp.deadline;
                @ if rsvp_notice == Some(RsvpNotice::Success) {
                    p(class = "notice success") : &rsvp.confirmation.success;
                }
                @ if rsvp_notice == Some(RsvpNotice::Error) {
                    p(class = "notice error") : &rsvp.confirmation.error;
                }
                @ if rsvp_notice != Some(RsvpNotice::Success) {
                    form(method = "post", action = &rsvp_action) {
                        label(for = "name") : format!("{}*", rsvp.form.name.label);
                        input(type = "text", id = "name", name = "name", placeholder = &rsvp.form.name.placeholder, value = guest_names.unwrap_or_default(), required = "required");
                        label(for = "email") : format!("{}*", rsvp.form.email.label);
                        input(type = "email", id = "email", name = "email", placeholder = &rsvp.form.email.placeholder, required = "required");
                        span : format!("{}*", rsvp.form.attending.label);
                        label {
                            input(type = "radio", name = "attending", value = "yes", checked = "checked");
                            : &rsvp.form.attending.options.yes;
                        }
                        label {
                            input(type = "radio", name = "attending", value = "no");
                            : &rsvp.form.attending.options.no;
                        }
                        label(for = "guests") : &rsvp.form.guests.label;
                        select(id = "guests", name = "guests") {
                            @ for n in 1..=MAX_PARTY_SIZE {
                                option(value = n.to_string()) : n.to_string();
                            }
                        }
                        label(for = "dietary") : &rsvp.form.dietary.label;
                        input(type = "text", id = "dietary", name = "dietary", placeholder = &rsvp.form.dietary.placeholder);
                        label(for = "message") : &rsvp.form.message.label;
                        textarea(id = "message", name = "message", rows = "4", placeholder = &rsvp.form.message.placeholder) : "";
                        button(type = "submit") : &rsvp.form.submit;
                    }
                }
            }

            section(id = "registry") {
                h2(class = "section-title") : &registry.title;
                p(class = "section-subtitle") : &registry.subtitle;
                div(class = "grid") {
                    @ for item in &registry.items {
                        div(class = "registry-item") {
                            @ if let Some(src) = &item.image {
                                img(src = src, alt = &item.name);
                            }
                            h3 : &item.name;
                            p : &item.description;
                            a(href = &item.url, target = "_blank", rel = "noopener") : &item.name;
                        }
                    }
                }
            }

            section(id = "faq", style = format_args!("background-color: {}", faq.background_color)) {
                h2(class = "section-title") : &faq.title;
                p(class = "section-subtitle") : &faq.subtitle;
                @ for q in &faq.questions {
                    details(id = slugify(&q.question)) {
                        summary : &q.question;
                        p : &q.answer;
                    }
                }
                div(class = "section-title") {
                    h3 : &faq.contact.title;
                    p : &faq.contact.message;
                    a(href = format_args!("mailto:{}", faq.contact.email)) : &faq.contact.email;
                }
            }
        };
    }
}

struct VenueCard<'a>(&'a Venue);

impl RenderOnce for VenueCard<'_> {
    fn render_once(self, tmpl: &mut TemplateBuffer<'_>) {
        let venue = self.0;
        tmpl << html! {
            div(class = "venue") {
                h3 : &venue.title;
                @ if let Some(src) = &venue.image {
                    img(src = src, alt = &venue.title);
                }
                p {
                    strong : &venue.date;
                    : " · ";
                    strong : &venue.time;
                }
                p {
                    @ for line in venue.address.lines() {
                        : line;
                        br;
                    }
                }
                p : &venue.description;
            }
        };
    }
}

struct PartyCards<'a>(&'a PartyGroup);

impl RenderOnce for PartyCards<'_> {
    fn render_once(self, tmpl: &mut TemplateBuffer<'_>) {
        let group = self.0;
        tmpl << html! {
            h3(class = "section-title") : &group.title;
            div(class = "grid") {
                @ for member in &group.members {
                    div(class = "party-member") {
                        @ if let Some(src) = &member.image {
                            img(class = "avatar", src = src, alt = &member.name);
                        } else {
                            div(class = "avatar") : initials(&member.name);
                        }
                        h4 : &member.name;
                        em : &member.role;
                        p : &member.message;
                    }
                }
            }
        };
    }
}
