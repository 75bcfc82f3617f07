//! HTML Views
//!
//! Server-rendered pages for the landing page, admin dashboard and RSVP
//! form, built with `maud`. Interpolated values are escaped by the macro.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::dashboard::{DashboardView, Theme};
use crate::guests::GuestStatus;
use crate::ports::{Notification, Severity};
use crate::rsvp::{Attendance, GuestSummary, RsvpForm, MAX_PARTY_SIZE, MIN_PARTY_SIZE};
use crate::wedding::WeddingDetails;

const STYLE: &str = r#"
body { margin: 0; font-family: Georgia, serif; color: #374151; }
.theme-rose { background: linear-gradient(135deg, #fff1f2, #faf5ff); }
.theme-rose header { background: linear-gradient(90deg, #e11d48, #9333ea); }
.theme-saffron { background: linear-gradient(135deg, #fff7ed, #fef2f2); }
.theme-saffron header { background: linear-gradient(90deg, #f97316, #ef4444); }
header { color: #fff; padding: 1.5rem; text-align: center; }
main { max-width: 60rem; margin: 0 auto; padding: 1.5rem; }
.card { background: #fff; border: 4px solid #fda4af; border-radius: 1rem; padding: 1.5rem; margin-bottom: 1.5rem; }
.grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr)); gap: 1rem; }
.badge { display: inline-block; padding: 0.1rem 0.5rem; border-radius: 999px; font-size: 0.75rem; }
.badge-attending { background: #dcfce7; color: #166534; }
.badge-not-attending { background: #fee2e2; color: #991b1b; }
.badge-pending { background: #fef9c3; color: #854d0e; }
.guest { display: flex; justify-content: space-between; align-items: center; padding: 1rem; border: 2px solid #fecdd3; border-radius: 0.5rem; margin-bottom: 0.75rem; }
.toast { padding: 0.75rem 1rem; border-radius: 0.5rem; margin-bottom: 0.75rem; background: #f0fdf4; border: 2px solid #86efac; }
.toast-destructive { background: #fef2f2; border-color: #fca5a5; }
.total { font-size: 2rem; font-weight: bold; }
button, .button { background: #e11d48; color: #fff; border: 0; border-radius: 0.5rem; padding: 0.5rem 1rem; cursor: pointer; text-decoration: none; }
"#;

// Copy buttons and #copy-failed carry the toast text as data attributes.
const COPY_SCRIPT: &str = r#"
function showToast(src) {
  var toast = document.createElement('div');
  toast.className = src.dataset.toastClass;
  toast.setAttribute('role', 'status');
  var title = document.createElement('strong');
  title.textContent = src.dataset.title;
  var description = document.createElement('div');
  description.textContent = src.dataset.description;
  toast.append(title, description);
  document.getElementById('toasts').append(toast);
}
document.querySelectorAll('[data-copy]').forEach(function (btn) {
  btn.addEventListener('click', function () {
    navigator.clipboard.writeText(btn.dataset.copy).then(
      function () { showToast(btn); },
      function () { showToast(document.getElementById('copy-failed')); }
    );
  });
});
"#;

const PARTY_SIZE_SCRIPT: &str = r#"
document.querySelectorAll('input[name="attending"]').forEach(function (radio) {
  radio.addEventListener('change', function () {
    document.getElementById('party-size').hidden = radio.value !== 'yes';
  });
});
"#;

fn toast_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "toast",
        Severity::Destructive => "toast toast-destructive",
    }
}

fn page(title: &str, theme: Theme, notifications: &[Notification], body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body class=(theme.css_class()) {
                div id="toasts" {
                    @for note in notifications {
                        div class=(toast_class(note.severity)) role="status" {
                            strong { (note.title) }
                            div { (note.description) }
                        }
                    }
                }
                (body)
            }
        }
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

/// GET /
pub fn landing(theme: Theme, details: &WeddingDetails) -> Markup {
    let body = html! {
        header {
            h1 { "Wedding RSVP" }
            p { "A Sacred Celebration of Love and Union" }
        }
        main {
            section class="card" {
                div class="grid" {
                    div { h3 { "Bride & Groom" } p { (details.couple()) } }
                    div {
                        h3 { "Ceremony Date" }
                        p { (or_placeholder(&details.date, "Date will be displayed here")) }
                    }
                    div {
                        h3 { "Venue" }
                        p { (or_placeholder(&details.venue, "Venue details will be displayed here")) }
                    }
                    div {
                        h3 { "Time" }
                        p { (or_placeholder(&details.time, "Ceremony time will be displayed here")) }
                    }
                }
            }
            div class="grid" {
                section class="card" {
                    h3 { "Admin Panel" }
                    p { "Manage guests, customize content, and view RSVP responses" }
                    a class="button" href="/admin" { "Enter Admin Dashboard" }
                }
                section class="card" {
                    h3 { "Guest RSVP" }
                    p { "Access your personalized RSVP form with your unique link" }
                    p { em { "Please use the personalized link sent to you via email" } }
                }
            }
        }
    };

    page("Wedding RSVP", theme, &[], body)
}

fn badge(status: GuestStatus) -> Markup {
    html! {
        span class=(format!("badge badge-{}", status)) { (status.label()) }
    }
}

/// GET /admin
pub fn dashboard(
    view: &DashboardView,
    details: &WeddingDetails,
    notifications: &[Notification],
) -> Markup {
    let copy_failed = Notification::copy_failed();

    let body = html! {
        header {
            h1 { "Admin Dashboard" }
            a class="button" href="/" { "Back to Home" }
        }
        main {
            @if view.show_total_card {
                section class="card" id="total-attendees" {
                    div class="total" { (view.stats.total_attendees) }
                    p { "Total People Attending" }
                }
            }

            section class="card" id="add-guest" {
                h2 { "Add New Guest" }
                form method="post" action="/admin/guests" {
                    label { "Guest Name " input name="name" placeholder="Enter guest name"; }
                    label {
                        "Email Address "
                        input name="email" type="email" placeholder="Enter email address";
                    }
                    button type="submit" { "Add Guest" }
                }
            }

            section class="card" id="guest-list" {
                h2 { "Guest List (" (view.rows.len()) " guests)" }
                @for row in &view.rows {
                    div class="guest" {
                        div {
                            h3 { (row.guest.name) }
                            p { (row.guest.email) }
                            (badge(row.guest.status))
                            div { small { "RSVP Link: " (row.path) } }
                        }
                        div {
                            @if view.copy_link {
                                @let copied = Notification::link_copied(&row.guest.name);
                                button type="button"
                                    data-copy=(row.link)
                                    data-title=(copied.title)
                                    data-description=(copied.description)
                                    data-toast-class=(toast_class(copied.severity)) {
                                    "Copy Link"
                                }
                                " "
                            }
                            @if view.open_link {
                                a class="button" href=(row.link) target="_blank" rel="noopener" {
                                    "Test Link"
                                }
                            }
                        }
                    }
                }
            }

            section class="card" id="content" {
                h2 { "Website Content" }
                form method="post" action="/admin/content" {
                    div class="grid" {
                        label {
                            "Bride Name "
                            input name="bride" value=(details.bride) placeholder="Enter bride name";
                        }
                        label {
                            "Groom Name "
                            input name="groom" value=(details.groom) placeholder="Enter groom name";
                        }
                        label { "Wedding Date " input name="date" type="date" value=(details.date); }
                        label { "Wedding Time " input name="time" type="time" value=(details.time); }
                    }
                    label {
                        "Venue Details "
                        input name="venue" value=(details.venue) placeholder="Enter venue address";
                    }
                    button type="submit" { "Save Changes" }
                }
            }

            section class="card" id="responses" {
                h2 { "RSVP Response Summary" }
                div class="grid" {
                    div { div class="total" { (view.stats.attending) } p { "Attending" } }
                    div { div class="total" { (view.stats.not_attending) } p { "Not Attending" } }
                    div { div class="total" { (view.stats.pending) } p { "Pending" } }
                }
                p { "Total expected guests: " (view.stats.total_attendees) }
            }
        }

        @if view.copy_link {
            div id="copy-failed" hidden
                data-title=(copy_failed.title)
                data-description=(copy_failed.description)
                data-toast-class=(toast_class(copy_failed.severity)) {}
            script { (PreEscaped(COPY_SCRIPT)) }
        }
    };

    page("Admin Dashboard", view.theme, notifications, body)
}

/// GET /rsvp/:guest_id (editing)
pub fn rsvp_form(guest: &GuestSummary, form: &RsvpForm, notifications: &[Notification]) -> Markup {
    let body = html! {
        header { h1 { "Wedding RSVP" } }
        main {
            section class="card" {
                h2 { "Namaste, " (guest.name) "!" }
                p { "We request the pleasure of your company as we celebrate our wedding" }
                form method="post" action=(format!("/rsvp/{}", guest.id)) {
                    fieldset {
                        legend { "Will you be attending the wedding?" }
                        label {
                            input type="radio" name="attending" value="yes"
                                checked[form.attending() == Attendance::Yes];
                            " Yes, I'll be there!"
                        }
                        label {
                            input type="radio" name="attending" value="no"
                                checked[form.attending() == Attendance::No];
                            " No, I cannot attend"
                        }
                    }
                    div id="party-size" hidden[!form.shows_guest_count()] {
                        label {
                            "Number of guests (including you) "
                            input type="number" name="guest_count" value=(form.guest_count())
                                min=(MIN_PARTY_SIZE) max=(MAX_PARTY_SIZE);
                        }
                    }
                    label {
                        "Message for the couple (optional)"
                        textarea name="message" placeholder="Your wishes or message..." {
                            (form.message())
                        }
                    }
                    button type="submit" { "Submit RSVP" }
                }
            }
        }
        script { (PreEscaped(PARTY_SIZE_SCRIPT)) }
    };

    page("Wedding RSVP", Theme::Saffron, notifications, body)
}

/// Thank-you page after a successful submit
pub fn rsvp_submitted(
    guest: &GuestSummary,
    form: &RsvpForm,
    notifications: &[Notification],
) -> Markup {
    let reply = match form.attending() {
        Attendance::Yes => "We're excited to have you join us for our special day!",
        _ => "We're sorry you won't be able to join us, but we appreciate your response.",
    };

    let body = html! {
        header { h1 { "Thank You!" } }
        main {
            section class="card" {
                p { "Your RSVP has been successfully submitted." }
                p { (reply) }
                p { small { "You can revisit this page at any time to update your response." } }
                form method="post" action=(format!("/rsvp/{}/revise", guest.id)) {
                    input type="hidden" name="attending" value=(form.attending().as_str());
                    input type="hidden" name="guest_count" value=(form.guest_count());
                    input type="hidden" name="message" value=(form.message());
                    button type="submit" { "Update RSVP" }
                }
            }
        }
    };

    page("Thank You", Theme::Saffron, notifications, body)
}

/// Terminal view for an unknown RSVP link
pub fn guest_not_found() -> Markup {
    let body = html! {
        main {
            section class="card" {
                h2 { "Guest Not Found" }
                p { "The RSVP link you're using is not valid or has expired." }
                a class="button" href="/" { "Return to Home" }
            }
        }
    };

    page("Guest Not Found", Theme::Saffron, &[], body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{DashboardConfig, LinkAction};
    use crate::guests::{sample_guests, GuestRegistry};

    fn view(config: &DashboardConfig) -> DashboardView {
        let registry = GuestRegistry::with_guests(sample_guests());
        DashboardView::build(
            config,
            "https://example.com",
            registry.guests().to_vec(),
            registry.stats(),
        )
    }

    fn summary(name: &str) -> GuestSummary {
        GuestSummary {
            id: "1".to_string(),
            name: name.to_string(),
            email: "rajesh@example.com".to_string(),
        }
    }

    #[test]
    fn test_guest_values_are_escaped() {
        let html = rsvp_form(&summary("<script>x</script>"), &RsvpForm::new("1"), &[]).into_string();
        assert!(html.contains("Namaste, &lt;script&gt;x&lt;/script&gt;!"));
        assert!(!html.contains("<script>x</script>"));
    }

    #[test]
    fn test_dashboard_full_variant() {
        let html = dashboard(&view(&DashboardConfig::default()), &WeddingDetails::default(), &[])
            .into_string();

        assert!(html.contains("Total People Attending"));
        assert!(html.contains("Copy Link"));
        assert!(html.contains("Test Link"));
        assert!(html.contains("https://example.com/rsvp/2"));
        assert!(html.contains("RSVP Link: /rsvp/1"));
        assert!(html.contains("Guest List (3 guests)"));
        assert!(html.contains("theme-rose"));
    }

    #[test]
    fn test_dashboard_copy_only_variant() {
        let config = DashboardConfig {
            theme: Theme::Saffron,
            actions: [LinkAction::CopyLink].into_iter().collect(),
            show_total_card: false,
        };
        let html = dashboard(&view(&config), &WeddingDetails::default(), &[]).into_string();

        assert!(!html.contains("Total People Attending"));
        assert!(html.contains("Copy Link"));
        assert!(!html.contains("Test Link"));
        assert!(html.contains("theme-saffron"));
    }

    #[test]
    fn test_copy_buttons_carry_port_notifications() {
        let html = dashboard(&view(&DashboardConfig::default()), &WeddingDetails::default(), &[])
            .into_string();

        let copied = Notification::link_copied("Priya Shah");
        let failed = Notification::copy_failed();
        assert!(html.contains(&format!(r#"data-title="{}""#, copied.title)));
        assert!(html.contains(&copied.description));
        assert!(html.contains(r#"id="copy-failed""#));
        assert!(html.contains(&failed.description));
        assert!(html.contains(r#"data-toast-class="toast toast-destructive""#));
        assert!(!html.contains("alert("));
    }

    #[test]
    fn test_open_only_dashboard_has_no_copy_script() {
        let config = DashboardConfig {
            theme: Theme::Rose,
            actions: [LinkAction::OpenLink].into_iter().collect(),
            show_total_card: true,
        };
        let html = dashboard(&view(&config), &WeddingDetails::default(), &[]).into_string();

        assert!(!html.contains("copy-failed"));
        assert!(!html.contains("navigator.clipboard"));
    }

    #[test]
    fn test_party_size_input_always_present() {
        let html = rsvp_form(&summary("Rajesh Patel"), &RsvpForm::new("1"), &[]).into_string();
        assert!(html.contains("Namaste, Rajesh Patel!"));
        assert!(html.contains(r#"<div id="party-size" hidden>"#));
        assert!(html.contains(r#"type="number" name="guest_count" value="1" min="1" max="5""#));

        let form = RsvpForm::from_input("1", "yes", "3", "");
        let html = rsvp_form(&summary("Rajesh Patel"), &form, &[]).into_string();
        assert!(html.contains(r#"<div id="party-size">"#));
        assert!(html.contains(r#"name="guest_count" value="3""#));
        assert!(html.contains(r#"value="yes" checked"#));
    }

    #[test]
    fn test_notifications_render_as_toasts() {
        let html = landing(Theme::Rose, &WeddingDetails::default()).into_string();
        assert!(!html.contains(r#"role="status""#));

        let html = rsvp_form(
            &summary("R"),
            &RsvpForm::new("1"),
            &[Notification::destructive("Please select your attendance", "x")],
        )
        .into_string();
        assert!(html.contains("toast toast-destructive"));
        assert!(html.contains("Please select your attendance"));
    }
}
