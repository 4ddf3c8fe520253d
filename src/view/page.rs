//! HTML page shell: sidebar plus main content

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::state::RunState;

use super::{
    display::DIGIT_MOTION,
    navigation::{self, Icon},
    DigitGroup, PauseLabel, TimerView,
};

const BRAND: &str = "Keiri";
const USER_NAME: &str = "User";
const USER_EMAIL: &str = "user@example.com";

/// Render the full document for `location`.
///
/// `timer` is only drawn on the home page.
pub fn render_page(location: &str, timer: &TimerView) -> String {
    let destination = navigation::destination(location);
    let title = destination.map_or("Not found", |item| item.label);
    let on_home = destination.is_some_and(|item| item.path == "/");
    let refresh = on_home && timer.state == RunState::Running;

    let page = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                @if refresh {
                    meta http-equiv="refresh" content="1";
                }
                title { (title) " | " (BRAND) }
                meta name="description" content="Make it Happen";
                style { (PreEscaped(stylesheet())) }
            }
            body {
                (sidebar(location))
                main {
                    @match destination.map(|item| item.path) {
                        Some("/") => {
                            (timer_widget(timer))
                        },
                        Some(_) => {
                            h2 { (title) }
                        },
                        None => {
                            h2 { "Not found" }
                            p { "No page at " (location) }
                        }
                    }
                }
            }
        }
    };
    page.into_string()
}

fn sidebar(location: &str) -> Markup {
    html! {
        nav.sidebar {
            header {
                (icon(Icon::Axe))
                h1 { (BRAND) }
                div.rule {}
            }
            p.group-label { "Dashboard" }
            ul {
                @for entry in navigation::menu(location) {
                    li class=[entry.active.then_some("active")] {
                        a href=(entry.item.path) {
                            (icon(entry.item.icon))
                            span { (entry.item.label) }
                        }
                    }
                }
            }
            footer {
                div.avatar { "U" }
                div {
                    p { (USER_NAME) }
                    p.muted { (USER_EMAIL) }
                }
                button.ghost title="Log out" {
                    (icon(Icon::LogOut))
                    span.sr-only { "Log out" }
                }
            }
        }
    }
}

fn timer_widget(timer: &TimerView) -> Markup {
    let controls = &timer.controls;
    let pause_action = match controls.pause_label {
        PauseLabel::Resume => "resume",
        PauseLabel::Pause => "pause",
    };

    html! {
        section.timer role="timer" {
            div.units {
                @for (i, group) in timer.groups.iter().enumerate() {
                    @if i > 0 {
                        div.colon { ":" }
                    }
                    (digit_group(group))
                }
            }
            div.controls {
                (control("decrement", "\u{2212}10 min", controls.decrement))
                (control("start", "Start", controls.start))
                (control(pause_action, controls.pause_label.as_str(), controls.pause_resume))
                (control("reset", "Reset", controls.reset))
                (control("increment", "+10 min", controls.increment))
            }
        }
    }
}

fn digit_group(group: &DigitGroup) -> Markup {
    html! {
        div.unit {
            div.digits {
                @if let Some(old) = &group.exiting {
                    span.digit.exit { (old) }
                    span.digit.enter { (group.value) }
                } @else {
                    span.digit { (group.value) }
                }
            }
            span.label { (group.label) }
        }
    }
}

fn control(action: &str, label: &str, enabled: bool) -> Markup {
    html! {
        form method="post" action={ "/ui/timer/" (action) } {
            button type="submit" disabled[!enabled] { (label) }
        }
    }
}

fn icon(icon: Icon) -> Markup {
    html! {
        span class={ "icon icon-" (icon.name()) } aria-hidden="true" { (icon.glyph()) }
    }
}

fn stylesheet() -> String {
    format!(
        "\n\
body {{ display: flex; margin: 0; font-family: 'Open Sans', sans-serif; }}\n\
.sidebar {{ width: 16rem; min-height: 100vh; display: flex; flex-direction: column; border-right: 1px solid #e5e7eb; }}\n\
.sidebar ul {{ list-style: none; padding: 0 .5rem; flex: 1; }}\n\
.sidebar li a {{ display: flex; gap: .75rem; padding: .75rem; border-radius: .5rem; color: inherit; text-decoration: none; }}\n\
.sidebar li.active a {{ background: rgba(37, 99, 235, .1); color: #2563eb; }}\n\
.sr-only {{ position: absolute; width: 1px; height: 1px; overflow: hidden; }}\n\
main {{ flex: 1; display: grid; place-items: center; }}\n\
.units {{ display: flex; align-items: center; gap: 1rem; }}\n\
.digits {{ position: relative; width: 6rem; height: 7rem; overflow: hidden; border-radius: .5rem; background: #f3f4f6; }}\n\
.digit {{ position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; font-size: 3rem; font-weight: 700; }}\n\
.digit.enter {{ animation: digit-enter {d}s cubic-bezier(.34, 1.2, .64, 1) both; }}\n\
.digit.exit {{ animation: digit-exit {d}s ease-out both; }}\n\
@keyframes digit-enter {{ from {{ transform: translateY({o}px); opacity: 0; }} to {{ transform: translateY(0); opacity: 1; }} }}\n\
@keyframes digit-exit {{ from {{ transform: translateY(0); opacity: 1; }} to {{ transform: translateY(-{o}px); opacity: 0; }} }}\n\
.controls {{ display: flex; gap: .5rem; margin-top: 2rem; justify-content: center; }}\n",
        d = DIGIT_MOTION.duration_secs,
        o = DIGIT_MOTION.offset_px,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CountdownTimer, TimerBounds};

    fn idle_view() -> TimerView {
        TimerView::new(&CountdownTimer::new(3661.0, TimerBounds::default()), None)
    }

    #[test]
    fn home_page_draws_timer_and_highlights_home() {
        let html = render_page("/", &idle_view());
        assert!(html.contains("<li class=\"active\"><a href=\"/\">"));
        assert!(html.contains("<span class=\"digit\">01</span>"));
        assert!(html.contains("<span class=\"label\">Seconds</span>"));
        assert!(html.contains("action=\"/ui/timer/pause\"><button type=\"submit\" disabled>Pause"));
        assert!(!html.contains("http-equiv=\"refresh\""));
    }

    #[test]
    fn stats_page_highlights_statistics_only() {
        let html = render_page("/stats", &idle_view());
        assert_eq!(html.matches("class=\"active\"").count(), 1);
        assert!(html.contains("<li class=\"active\"><a href=\"/stats\">"));
        assert!(!html.contains("role=\"timer\""));
    }

    #[test]
    fn running_home_page_refreshes_and_animates() {
        let mut timer = CountdownTimer::new(3661.0, TimerBounds::default());
        let before = TimerView::new(&timer, None);
        timer.start();
        timer.tick();
        let view = TimerView::new(&timer, Some(&before.display));
        let html = render_page("/", &view);
        assert!(html.contains("http-equiv=\"refresh\""));
        assert!(html.contains("<span class=\"digit exit\">01</span>"));
        assert!(html.contains("<span class=\"digit enter\">00</span>"));
    }

    #[test]
    fn document_head_and_footer() {
        let html = render_page("/goals", &idle_view());
        assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">"));
        assert!(html.contains("<title>Goals | Keiri</title>"));
        assert!(html.contains("@keyframes digit-enter"));
        assert!(html.contains("<p class=\"muted\">user@example.com</p>"));
        assert!(html.contains("<span class=\"sr-only\">Log out</span>"));
    }

    #[test]
    fn unknown_location_is_escaped() {
        let html = render_page("/<script>", &idle_view());
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("class=\"active\""));
    }
}
