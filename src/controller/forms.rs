use std::time::Duration;
use dioxus::logger::tracing::{error, info};

use super::Context;
use crate::utils::surface::Surface;

pub const CONTACT_FORM_CLASS: &str = "contact-form";
pub const NEWSLETTER_FORM_CLASS: &str = "newsletter-form";
const CONTACT_BUTTON_CLASS: &str = "submit-button";

pub fn submit_contact<S: Surface + 'static>(ctx: &Context<S>, form: &S::Node) {
  let fields = ctx.surface.form_fields(form);
  info!("contact form submitted with {:?}", fields);
  let button = ctx.surface.first_in(form, CONTACT_BUTTON_CLASS);
  let notices = &ctx.config.notices;
  simulate_submission(ctx, form, button, &notices.contact_pending, ctx.config.timings.contact_delay(), notices.contact_sent.clone());
}

pub fn submit_newsletter<S: Surface + 'static>(ctx: &Context<S>, form: &S::Node) {
  let email = ctx.surface.form_fields(form).into_iter()
    .find(|f| f.kind == "email")
    .map(|f| f.value)
    .unwrap_or_default();
  info!("newsletter signup for {:?}", email);
  let button = ctx.surface.tag_in(form, "button");
  let notices = &ctx.config.notices;
  simulate_submission(ctx, form, button, &notices.newsletter_pending, ctx.config.timings.newsletter_delay(), notices.newsletter_sent.clone());
}

/// Disables the button, waits `delay`, then notifies, resets the form and
/// restores the button, in that order.
fn simulate_submission<S: Surface + 'static>(
  ctx: &Context<S>,
  form: &S::Node,
  button: Option<S::Node>,
  pending_label: &str,
  delay: Duration,
  notice: String,
) {
  let surface = &*ctx.surface;
  let label = button.as_ref().map(|b| surface.text(b));
  if let Some(b) = &button {
    surface.set_text(b, pending_label);
    surface.set_attr(b, "disabled", "");
  }

  let done_ctx = ctx.clone();
  let done_form = form.clone();
  let done_button = button.clone();
  let done_label = label.clone();
  let scheduled = ctx.scheduler.after(delay, Box::new(move || {
    done_ctx.notifier.notify(&notice);
    done_ctx.surface.reset_form(&done_form);
    restore_button(&*done_ctx.surface, done_button.as_ref(), done_label.as_deref());
  }));

  if let Err(e) = scheduled {
    error!("failed to schedule form completion: {}", e);
    restore_button(surface, button.as_ref(), label.as_deref());
  }
}

fn restore_button<S: Surface>(surface: &S, button: Option<&S::Node>, label: Option<&str>) {
  if let (Some(b), Some(label)) = (button, label) {
    surface.set_text(b, label);
    surface.remove_attr(b, "disabled");
  }
}
