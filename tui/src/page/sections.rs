//! Section renderers
//!
//! Each function turns one section of the [`Showcase`] into owned lines at a
//! given content width. Rotator-backed sections render whichever item the
//! cross-fade currently favours, faded by its opacity.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use showcase_core::content::{
    self, ServiceCategory, CTA_HEADLINE, CTA_SUBTITLE, HERO_HEADLINE, HERO_LEAD, NEWSLETTER_PITCH,
    PRODUCTS_SUBTITLE, SERVICES_SUBTITLE, SUBSCRIBED_HEADLINE, SUBSCRIBED_MESSAGE,
    TESTIMONIALS_SUBTITLE,
};
use showcase_core::{Clock, CrossFade, Easing, Rotator, SectionId, Showcase, SubscriptionState};

use crate::theme::{self, fade_style};

/// Left margin for all section content
const MARGIN: &str = "  ";

/// Width of the newsletter address field
const FIELD_WIDTH: usize = 40;

// ============================================================================
// Helpers
// ============================================================================

/// Which item a rotator shows right now, and how opaque it is
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shown {
    /// Item index to render
    pub index: usize,
    /// Opacity from the cross-fade (1.0 when idle)
    pub opacity: f32,
}

/// Resolve the cross-fade into a single renderable item
///
/// Terminal cells cannot overlay two items, so the outgoing item is shown
/// until the incoming one becomes the more opaque of the two.
pub fn shown<C: Clock>(rotator: &Rotator<C>) -> Shown {
    match (rotator.pending_target(), rotator.transition_progress()) {
        (Some(target), Some(progress)) => {
            let fade = CrossFade::at(progress, Easing::EaseInOut);
            if fade.outgoing >= fade.incoming {
                Shown {
                    index: rotator.current_index(),
                    opacity: fade.outgoing,
                }
            } else {
                Shown {
                    index: target,
                    opacity: fade.incoming,
                }
            }
        }
        _ => Shown {
            index: rotator.current_index(),
            opacity: 1.0,
        },
    }
}

fn wrapped(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    textwrap::wrap(text, width.max(1))
        .into_iter()
        .map(|line| Line::from(Span::styled(format!("{MARGIN}{line}"), style)))
        .collect()
}

fn indented(prefix: &str, text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    let options = textwrap::Options::new(width.max(1))
        .initial_indent(prefix)
        .subsequent_indent("    ");
    textwrap::wrap(text, options)
        .into_iter()
        .map(|line| Line::from(Span::styled(format!("{MARGIN}{line}"), style)))
        .collect()
}

fn heading(section: SectionId, focused: bool) -> Line<'static> {
    let marker = if focused {
        Span::styled("▶ ", theme::accent())
    } else {
        Span::raw(MARGIN)
    };
    Line::from(vec![marker, Span::styled(section.title().to_string(), theme::heading())])
}

/// Blend every span toward the background
pub(crate) fn faded(lines: Vec<Line<'static>>, opacity: f32) -> Vec<Line<'static>> {
    if opacity >= 1.0 {
        return lines;
    }
    lines
        .into_iter()
        .map(|line| {
            let base = line.style;
            let spans: Vec<Span<'static>> = line
                .spans
                .into_iter()
                .map(|span| {
                    let style = fade_style(base.patch(span.style), opacity);
                    span.style(style)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// Tab strip with the rotator's effective index selected
fn tabs<'a, C: Clock>(labels: impl Iterator<Item = &'a str>, rotator: &Rotator<C>) -> Line<'static> {
    let active = rotator.effective_index();
    let mut spans = vec![Span::raw(MARGIN)];
    for (i, label) in labels.enumerate() {
        let style = if i == active { theme::selected() } else { theme::muted() };
        spans.push(Span::styled(format!(" {} {label} ", i + 1), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// A `━━━───` bar, `fraction` full
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn progress_bar(fraction: f32, width: usize) -> String {
    let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
    let filled = ((width as f32) * fraction).round() as usize;
    format!("{}{}", "━".repeat(filled.min(width)), "─".repeat(width - filled.min(width)))
}

// ============================================================================
// Sections
// ============================================================================

/// Headline, typed phrase and the code snippet
pub fn hero<C: Clock + Clone>(page: &Showcase<C>, width: usize, focused: bool) -> Vec<Line<'static>> {
    let mut lines = vec![heading(SectionId::Hero, focused), Line::default()];
    lines.extend(wrapped(HERO_HEADLINE, width, theme::heading()));
    lines.push(Line::default());

    lines.push(Line::from(vec![
        Span::raw(MARGIN),
        Span::styled(HERO_LEAD, theme::body()),
        Span::styled(page.typewriter().visible_text(), theme::accent().add_modifier(Modifier::BOLD)),
        Span::styled("▌", theme::accent()),
    ]));
    lines.push(Line::default());

    let code_style = Style::default().fg(theme::CODE_GREEN);
    let frame_style = theme::muted();
    let full_rows = content::CODE_SNIPPET.concat().split('\n').count();
    let revealed = page.code_reveal().visible_text();
    let mut rows: Vec<&str> = if revealed.is_empty() {
        Vec::new()
    } else {
        revealed.split('\n').collect()
    };
    rows.resize(full_rows, "");

    lines.push(Line::styled(format!("{MARGIN}┌─ solution.py"), frame_style));
    for row in rows {
        lines.push(Line::from(vec![
            Span::styled(format!("{MARGIN}│ "), frame_style),
            Span::styled(row.to_string(), code_style),
        ]));
    }
    lines.push(Line::styled(format!("{MARGIN}└─"), frame_style));
    lines
}

/// Category tabs and the service cards they select
pub fn services<C: Clock + Clone>(page: &Showcase<C>, width: usize, focused: bool) -> Vec<Line<'static>> {
    let rotator = page.service_tabs();
    let mut lines = vec![heading(SectionId::Services, focused)];
    lines.extend(wrapped(SERVICES_SUBTITLE, width, theme::muted()));
    lines.push(Line::default());
    lines.push(tabs(ServiceCategory::ALL.iter().map(|c| c.label()), rotator));
    lines.push(Line::default());

    let view = shown(rotator);
    let category = ServiceCategory::from_index(view.index).unwrap_or(ServiceCategory::All);

    let mut cards = Vec::new();
    for service in page.services().iter().filter(|s| category.includes(s.id)) {
        cards.push(Line::from(vec![
            Span::raw(MARGIN),
            Span::styled(format!("{} ", service.icon), theme::accent()),
            Span::styled(service.title, theme::heading()),
        ]));
        cards.extend(wrapped(service.description, width, theme::body()));
        for feature in service.features {
            cards.extend(indented("  • ", feature, width, theme::body()));
        }
        cards.push(Line::styled(format!("{MARGIN}Learn more → {}", service.link), theme::muted()));
        cards.push(Line::default());
    }
    lines.extend(faded(cards, view.opacity));
    lines
}

/// Product tab switcher
pub fn products<C: Clock + Clone>(page: &Showcase<C>, width: usize, focused: bool) -> Vec<Line<'static>> {
    let rotator = page.product_tabs();
    let mut lines = vec![heading(SectionId::Products, focused)];
    lines.extend(wrapped(PRODUCTS_SUBTITLE, width, theme::muted()));
    lines.push(Line::default());
    lines.push(tabs(page.products().iter().map(|p| p.title), rotator));
    lines.push(Line::default());

    let view = shown(rotator);
    let Some(product) = page.products().get(view.index) else {
        return lines;
    };
    let accent = theme::hex_color(product.accent_color).unwrap_or(theme::ACCENT_YELLOW);

    let mut panel = vec![Line::from(vec![
        Span::raw(MARGIN),
        Span::styled(product.title, Style::default().fg(accent).add_modifier(Modifier::BOLD)),
    ])];
    panel.extend(wrapped(product.description, width, theme::body()));
    panel.push(Line::default());
    for feature in product.features {
        panel.extend(indented("  ✓ ", feature, width, Style::default().fg(accent)));
    }
    panel.push(Line::default());
    panel.push(Line::from(vec![
        Span::raw(MARGIN),
        Span::styled(
            format!("[ {} → ]", product.cta_text),
            Style::default().fg(theme::PAGE_BG).bg(accent),
        ),
        Span::styled(format!("  {}", product.link), theme::muted()),
    ]));
    lines.extend(faded(panel, view.opacity));
    lines
}

/// Testimonial carousel and the stats row
pub fn testimonials<C: Clock + Clone>(
    page: &Showcase<C>,
    width: usize,
    focused: bool,
) -> Vec<Line<'static>> {
    let rotator = page.carousel();
    let mut lines = vec![heading(SectionId::Testimonials, focused)];
    lines.extend(wrapped(TESTIMONIALS_SUBTITLE, width, theme::muted()));
    lines.push(Line::default());

    let view = shown(rotator);
    if let Some(quote) = page.testimonials().get(view.index) {
        let stars = usize::from(quote.rating.min(5));
        let mut card = vec![Line::from(vec![
            Span::raw(MARGIN),
            Span::styled("★".repeat(stars), theme::accent()),
            Span::styled("☆".repeat(5 - stars), theme::muted()),
            Span::styled(format!("  {}", quote.category), theme::muted()),
        ])];
        card.extend(wrapped(&format!("\u{201c}{}\u{201d}", quote.content), width, theme::body()));
        card.push(Line::default());
        card.push(Line::from(vec![
            Span::raw(MARGIN),
            Span::styled(quote.author, theme::heading()),
            Span::styled(format!(", {}", quote.position), theme::muted()),
        ]));
        lines.extend(faded(card, view.opacity));
    }
    lines.push(Line::default());

    let mut controls = vec![Span::raw(MARGIN), Span::styled("‹ ", theme::accent())];
    for i in 0..rotator.len() {
        let (dot, style) = if i == rotator.effective_index() {
            ("●", theme::accent())
        } else {
            ("○", theme::muted())
        };
        controls.push(Span::styled(format!("{dot} "), style));
    }
    controls.push(Span::styled("›   ", theme::accent()));
    controls.push(Span::styled(autoplay_label(rotator), theme::muted()));
    lines.push(Line::from(controls));
    lines.push(Line::default());

    let mut stats = vec![Span::raw(MARGIN)];
    for stat in page.stats().iter() {
        stats.push(Span::styled(stat.value, theme::accent().add_modifier(Modifier::BOLD)));
        stats.push(Span::styled(format!(" {}   ", stat.label), theme::muted()));
    }
    lines.push(Line::from(stats));
    lines
}

fn autoplay_label<C: Clock>(rotator: &Rotator<C>) -> String {
    if !rotator.config().autoplay {
        return String::new();
    }
    match rotator.autoplay_progress() {
        Some(progress) => format!("autoplay {}", progress_bar(progress, 12)),
        None if rotator.cooldown_active() => "paused, resuming soon".to_string(),
        None if rotator.autoplay_enabled() => "autoplay".to_string(),
        None => "paused".to_string(),
    }
}

/// Call to action and the newsletter form
pub fn newsletter<C: Clock + Clone>(page: &Showcase<C>, width: usize, focused: bool) -> Vec<Line<'static>> {
    let mut lines = vec![heading(SectionId::Newsletter, focused)];
    lines.extend(wrapped(CTA_HEADLINE, width, theme::heading()));
    lines.extend(wrapped(CTA_SUBTITLE, width, theme::muted()));
    lines.push(Line::default());

    for feature in page.cta_features().iter() {
        lines.push(Line::from(vec![
            Span::raw(MARGIN),
            Span::styled("✓ ", theme::accent()),
            Span::styled(feature.title, theme::heading()),
            Span::styled(format!("  {}", feature.description), theme::muted()),
        ]));
    }
    lines.push(Line::default());

    let form = page.newsletter();
    match form.state() {
        SubscriptionState::Subscribed => {
            lines.push(Line::styled(
                format!("{MARGIN}✓ {SUBSCRIBED_HEADLINE}"),
                Style::default().fg(theme::SUCCESS_GREEN).add_modifier(Modifier::BOLD),
            ));
            lines.extend(wrapped(SUBSCRIBED_MESSAGE, width, theme::body()));
        }
        state => {
            lines.extend(wrapped(NEWSLETTER_PITCH, width, theme::body()));
            lines.push(address_field(form.address(), focused));

            let button = if state == SubscriptionState::Submitting {
                "Subscribing..."
            } else {
                "Subscribe"
            };
            lines.push(Line::from(vec![
                Span::raw(MARGIN),
                Span::styled(progress_bar(form.input_meter(), FIELD_WIDTH), theme::muted()),
                Span::raw(" "),
                Span::styled(format!("[ {button} ]"), theme::selected()),
            ]));

            if let Some(err) = form.error() {
                lines.push(Line::styled(
                    format!("{MARGIN}{err}"),
                    Style::default().fg(theme::ERROR_RED),
                ));
            }
        }
    }
    lines
}

/// `[ address_            ]`, showing the tail when the address is long
fn address_field(address: &str, focused: bool) -> Line<'static> {
    let inner = FIELD_WIDTH.saturating_sub(1);
    let mut text: String = address.to_string();
    while text.width() > inner {
        text.remove(0);
    }
    let cursor = if focused { "_" } else { " " };
    let pad = inner.saturating_sub(text.width());
    let shown = if text.is_empty() && !focused {
        Span::styled(format!("{:<inner$} ", "Your email address"), theme::muted())
    } else {
        Span::styled(format!("{text}{cursor}{}", " ".repeat(pad)), theme::body())
    };

    Line::from(vec![
        Span::raw(MARGIN),
        Span::styled("[ ", theme::muted()),
        shown,
        Span::styled(" ]", theme::muted()),
    ])
}
