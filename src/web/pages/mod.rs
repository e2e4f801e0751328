//! Server-rendered pages.

use horrorshow::{helper::doctype, html, Raw, RenderOnce, Template, TemplateBuffer};

use crate::i18n::{localized_path, Language, TranslationContent};

pub mod admin;
pub mod home;

pub use admin::AdminPage;
pub use home::{HomePage, RsvpNotice};

pub const BASE_STYLE: &str = r#"
* {
    --ivory: #fbf8f3;
    --blush: #e8c4c4;
    --sage: #8a9a7b;
    --gold: #b8975a;
    --ink: #3b3230;
    box-sizing: border-box;
}
body {
    margin: 0;
    font-family: Montserrat, "Helvetica Neue", Arial, sans-serif;
    color: var(--ink);
    background-color: var(--ivory);
}
h1, h2, h3 {
    font-family: "Playfair Display", Georgia, serif;
    font-weight: 400;
}
a {
    color: var(--gold);
}
section {
    padding: 64px 20px;
    max-width: 960px;
    margin: 0 auto;
}
.section-title {
    text-align: center;
}
.section-subtitle {
    text-align: center;
    color: var(--sage);
    margin-top: -8px;
}
#top-nav {
    position: sticky;
    top: 0;
    z-index: 10;
    display: flex;
    flex-wrap: wrap;
    gap: 16px;
    justify-content: center;
    padding: 12px;
    background-color: rgba(251, 248, 243, 0.92);
    border-bottom: 1px solid var(--blush);
}
#top-nav a {
    text-decoration: none;
    color: var(--ink);
}
#language-switcher {
    display: flex;
    gap: 8px;
    margin-left: 24px;
}
#language-switcher strong {
    color: var(--gold);
}
footer {
    text-align: center;
    padding: 40px 20px;
    background-color: var(--ink);
    color: var(--ivory);
}
footer a {
    color: var(--blush);
    margin: 0 8px;
}
"#;

/// Shared page chrome: navigation, language switcher and footer around `body`.
pub struct Layout<'a, C: RenderOnce> {
    pub language: Language,
    pub content: &'a TranslationContent,
    /// Current request path, for the language switcher.
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub body: C,
}

impl<C: RenderOnce> RenderOnce for Layout<'_, C> {
    fn render_once(self, tmpl: &mut TemplateBuffer<'_>) {
        let Layout { language, content, path, query, body } = self;
        let nav = &content.navigation;
        let footer = &content.footer;
        let home = format!("/{}", language.code());

        tmpl << html! {
            : doctype::HTML;
            html(lang = language.config().html_lang) {
                head {
                    meta(charset = "utf-8");
                    meta(name = "viewport", content = "width=device-width, initial-scale=1");
                    meta(name = "description", content = &content.meta.description);
                    title : &content.meta.title;
                    style : Raw(BASE_STYLE);
                    style : Raw(home::STYLE);
                }
                body {
                    nav(id = "top-nav") {
                        a(href = format_args!("{}#story", home)) : &nav.story;
                        a(href = format_args!("{}#event", home)) : &nav.event;
                        a(href = format_args!("{}#gallery", home)) : &nav.gallery;
                        a(href = format_args!("{}#rsvp", home)) : &nav.rsvp;
                        a(href = format_args!("{}#registry", home)) : &nav.registry;
                        a(href = format_args!("{}#faq", home)) : &nav.faq;
                        span(id = "language-switcher") {
                            @ for other in Language::all() {
                                @ if other == language {
                                    strong : other.native_name();
                                } else {
                                    a(href = localized_path(path, query, other), hreflang = other.code()) : other.native_name();
                                }
                            }
                        }
                    }
                    main : body;
                    footer {
                        p : &footer.message;
                        h2 : &footer.names;
                        p : &footer.date;
                        p {
                            a(href = &footer.social.instagram) : "Instagram";
                            a(href = &footer.social.facebook) : "Facebook";
                        }
                        small : &footer.copyright;
                    }
                }
            }
        };
    }
}

/// Page for unknown routes and unsupported languages. Not localized, since
/// the language is exactly what is unknown here.
pub fn not_found_page() -> String {
    html! {
        : doctype::HTML;
        html(lang = "en") {
            head {
                meta(charset = "utf-8");
                meta(name = "viewport", content = "width=device-width, initial-scale=1");
                title : "Not Found";
                style : Raw(BASE_STYLE);
            }
            body {
                section(class = "section-title") {
                    h1 : "Page not found";
                    p : "The page you requested was not found.";
                    p {
                        @ for language in Language::all() {
                            a(href = format_args!("/{}", language.code())) : language.native_name();
                            : " ";
                        }
                    }
                }
            }
        }
    }
    .into_string()
    .unwrap_or_else(|_| "Not Found".to_string())
}
