use horrorshow::{helper::doctype, html, Raw, RenderOnce, TemplateBuffer};

use super::BASE_STYLE;
use crate::guests::guest_url;
use crate::i18n::Language;
use crate::invitations::InvitationLink;

const STYLE: &str = r#"
#admin {
    max-width: 760px;
}
#admin textarea {
    width: 100%;
    font-size: 16px;
    padding: 8px 12px;
    border: 1px solid var(--blush);
    border-radius: 8px;
}
.link-row {
    display: grid;
    grid-template-columns: 1fr 120px;
    gap: 12px;
    align-items: center;
    background-color: #ffffff;
    border-radius: 12px;
    padding: 12px 16px;
    margin: 12px 0;
}
.link-row input {
    width: 100%;
    font-size: 14px;
    padding: 6px;
}
.link-row img {
    width: 120px;
    height: 120px;
}
.help {
    color: var(--sage);
}
"#;

/// Invitation link generator.
pub struct AdminPage<'a> {
    pub language: Language,
    pub couple_names: &'a str,
    /// The operator's text box, echoed back so it can be edited and resent.
    pub names_text: &'a str,
    pub links: &'a [InvitationLink],
}

impl RenderOnce for AdminPage<'_> {
    fn render_once(self, tmpl: &mut TemplateBuffer<'_>) {
        let AdminPage {
            language,
            couple_names,
            names_text,
            links,
        } = self;

        let code = language.code();
        let admin_path = format!("/{}/admin", code);
        let example = guest_url(&format!("/{}", code), &["John Smith"]);

        tmpl << html! {
            : doctype::HTML;
            html(lang = language.config().html_lang) {
                head {
                    meta(charset = "utf-8");
                    meta(name = "viewport", content = "width=device-width, initial-scale=1");
                    meta(name = "robots", content = "noindex");
                    title : "Wedding Admin - Invitation Links";
                    style : Raw(BASE_STYLE);
                    style : Raw(STYLE);
                }
                body {
                    section(id = "admin") {
                        h1 : format!("Create Invitation Links for {}", couple_names);
                        p(class = "help") {
                            : "Each link opens the wedding site with the guest's name in the greeting. ";
                            : "Example: ";
                            code : &example;
                        }
                        form(method = "post", action = &admin_path) {
                            label(for = "names") : "Enter guest names (one per line):";
                            textarea(id = "names", name = "names", rows = "8", placeholder = "John Smith\nJane Doe\nSmith Family") : names_text;
                            p {
                                button(type = "submit") : "Generate Guest Links";
                            }
                        }

                        @ if !links.is_empty() {
                            form(method = "post", action = format_args!("{}/links.csv", admin_path)) {
                                textarea(name = "names", hidden = "hidden") : names_text;
                                button(type = "submit") : "Export as Excel (CSV)";
                            }
                            h2 : format!("{} link(s)", links.len());
                            @ for item in links {
                                div(class = "link-row") {
                                    div {
                                        strong : &item.name;
                                        input(type = "text", readonly = "readonly", value = &item.link);
                                        a(href = &item.link, target = "_blank", rel = "noopener") : "Open";
                                    }
                                    img(
                                        src = guest_url(&format!("{}/qr.svg", admin_path), &[item.name.as_str()]),
                                        alt = format_args!("QR code for {}", item.name)
                                    );
                                }
                            }
                            p(class = "help") : "Print a QR code and include it in a physical invitation, or share the link directly.";
                        }
                    }
                }
            }
        };
    }
}
