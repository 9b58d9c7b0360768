//! Terminal rendering of the search screen and review feed.
//!
//! The renderer turns view models into ANSI-styled text using the injected
//! [`Palette`]. It returns strings instead of printing so callers decide where
//! output goes.
//!
//! ```text
//! Controller state → View model → render_* → ANSI String
//! ```

use crate::domain::StarRating;
use crate::ui::palette::Palette;
use crate::ui::viewmodel::{ReviewCard, ReviewFeedViewModel, SearchViewModel, VehicleCard};
use std::fmt::Write as _;

const FULL_STAR: char = '★';
const HALF_STAR: char = '⯪';
const EMPTY_STAR: char = '☆';

/// Renders the plate search screen.
#[must_use]
pub fn render_search(vm: &SearchViewModel, palette: &Palette, cols: usize) -> String {
    let c = &palette.colors;
    let mut out = String::new();

    line(&mut out, &format!("{}{}{}{}", Palette::bold(), Palette::fg(&c.primary), vm.title, Palette::reset()));
    line(&mut out, &format!("{}{}{}", Palette::fg(&c.gray_medium), vm.subtitle, Palette::reset()));
    separator(&mut out, &c.gray_light, cols);

    let input = if vm.input.value.is_empty() {
        format!("{}{}{}{}", Palette::italic(), Palette::fg(&c.gray_medium), vm.input.placeholder, Palette::reset())
    } else {
        format!("{}{}{}", Palette::fg(&c.gray_dark), vm.input.value, Palette::reset())
    };
    line(&mut out, &format!("Placa: [{input}]"));

    if let Some(hint) = &vm.validation_hint {
        line(&mut out, &format!("{}{hint}{}", Palette::fg(&c.gray_medium), Palette::reset()));
    }

    let button = if vm.submit.loading {
        format!("{}[ ... ]{}", Palette::fg(&c.gray_medium), Palette::reset())
    } else if vm.submit.enabled {
        format!("{}{}[ {} ]{}", Palette::bold(), Palette::fg(&c.secondary), vm.submit.label, Palette::reset())
    } else {
        format!("{}[ {} ]{}", Palette::fg(&c.gray_medium), vm.submit.label, Palette::reset())
    };
    line(&mut out, &button);

    if let Some(error) = &vm.error {
        line(&mut out, "");
        line(&mut out, &format!("{}{}{}", Palette::fg(&c.secondary), error.message, Palette::reset()));
    }

    if let Some(card) = &vm.vehicle_card {
        line(&mut out, "");
        render_vehicle_card(&mut out, card, palette, cols);
    }

    out
}

fn render_vehicle_card(out: &mut String, card: &VehicleCard, palette: &Palette, cols: usize) {
    let c = &palette.colors;

    line(out, &format!("{}{}✔ {}{}", Palette::bold(), Palette::fg(&c.success), card.badge, Palette::reset()));
    line(out, &format!("{}{}{}{}", Palette::bold(), Palette::fg(&c.primary), card.title, Palette::reset()));
    line(out, &format!("{}{}{}", Palette::fg(&c.gray_medium), card.subtitle, Palette::reset()));
    separator(out, &c.gray_light, cols);

    let label_width = card.details.iter().map(|row| row.label.chars().count()).max().unwrap_or(0);
    for row in &card.details {
        line(
            out,
            &format!(
                "{}{:<label_width$}{}  {}",
                Palette::fg(&c.gray_medium),
                row.label,
                Palette::reset(),
                row.value
            ),
        );
    }

    line(out, &format!("{}{}[ {} → ]{}", Palette::bold(), Palette::fg(&c.primary), card.continue_label, Palette::reset()));
}

/// Renders the review feed.
#[must_use]
pub fn render_reviews(vm: &ReviewFeedViewModel, palette: &Palette, cols: usize) -> String {
    let c = &palette.colors;
    let mut out = String::new();

    match vm {
        ReviewFeedViewModel::Loading { text } => {
            line(&mut out, &format!("{}{text}{}", Palette::fg(&c.primary), Palette::reset()));
        }
        ReviewFeedViewModel::Error { message } => {
            line(&mut out, &format!("{}⚠ {message}{}", Palette::fg(&c.secondary), Palette::reset()));
        }
        ReviewFeedViewModel::Empty { text } => {
            line(&mut out, &format!("{}{}{text}{}", Palette::italic(), Palette::fg(&c.gray_medium), Palette::reset()));
        }
        ReviewFeedViewModel::Loaded { title, subtitle, cards, footer } => {
            line(&mut out, &format!("{}{}{title}{}", Palette::bold(), Palette::fg(&c.primary), Palette::reset()));
            line(&mut out, &format!("{}{subtitle}{}", Palette::fg(&c.gray_medium), Palette::reset()));
            separator(&mut out, &c.secondary, cols);
            for card in cards {
                render_review_card(&mut out, card, palette);
                line(&mut out, "");
            }
            line(&mut out, &format!("{}{footer}{}", Palette::fg(&c.primary), Palette::reset()));
        }
    }

    out
}

fn render_review_card(out: &mut String, card: &ReviewCard, palette: &Palette) {
    let c = &palette.colors;

    line(out, &format!("{}{}{}{}", Palette::bold(), Palette::fg(&c.primary), card.heading, Palette::reset()));
    line(out, &format!("{}{}{}", Palette::fg(&c.accent), star_glyphs(card.stars), Palette::reset()));
    line(out, &format!("{}{}{}", Palette::fg(&c.gray_dark), card.text, Palette::reset()));
    line(out, &format!("{}{}{}", Palette::fg(&c.gray_medium), card.date, Palette::reset()));
}

/// Star glyphs for a rating: full, then half, then empty.
#[must_use]
pub fn star_glyphs(stars: StarRating) -> String {
    let mut glyphs = String::with_capacity(usize::from(crate::domain::MAX_STARS) * 3);
    glyphs.extend(std::iter::repeat(FULL_STAR).take(usize::from(stars.full)));
    glyphs.extend(std::iter::repeat(HALF_STAR).take(usize::from(stars.half)));
    glyphs.extend(std::iter::repeat(EMPTY_STAR).take(usize::from(stars.empty)));
    glyphs
}

fn line(out: &mut String, text: &str) {
    let _ = writeln!(out, "{text}");
}

fn separator(out: &mut String, color: &str, cols: usize) {
    line(out, &format!("{}{}{}", Palette::fg(color), "─".repeat(cols), Palette::reset()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ReviewFeedState;
    use crate::service::builtin_reviews;

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(ch) = chars.next() {
            if ch == '\u{1b}' {
                for next in chars.by_ref() {
                    if next == 'm' {
                        break;
                    }
                }
            } else {
                out.push(ch);
            }
        }
        out
    }

    #[test]
    fn glyphs_follow_star_counts() {
        assert_eq!(star_glyphs(StarRating::from_rating(4.5)), "★★★★⯪");
        assert_eq!(star_glyphs(StarRating::from_rating(3.0)), "★★★☆☆");
        assert_eq!(star_glyphs(StarRating::from_rating(0.0)), "☆☆☆☆☆");
    }

    #[test]
    fn loaded_feed_renders_every_card_in_order() {
        let vm = ReviewFeedViewModel::from_state(&ReviewFeedState::Loaded {
            items: builtin_reviews().unwrap(),
        });
        let text = strip_ansi(&render_reviews(&vm, &Palette::default(), 40));

        let jose = text.find("José A. - Auto Center Prime").unwrap();
        let carla = text.find("Carla R. - Mecânica Rápida").unwrap();
        let pedro = text.find("Pedro S. - Oficina do Seu Pedro").unwrap();
        assert!(jose < carla && carla < pedro);
        assert!(text.contains("★★★★⯪"));
    }

    #[test]
    fn loading_feed_renders_loading_text() {
        let vm = ReviewFeedViewModel::from_state(&ReviewFeedState::Loading);
        let text = strip_ansi(&render_reviews(&vm, &Palette::default(), 40));
        assert_eq!(text, "Carregando avaliações...\n");
    }

    #[test]
    fn stars_use_accent_color() {
        let vm = ReviewFeedViewModel::from_state(&ReviewFeedState::Loaded {
            items: builtin_reviews().unwrap(),
        });
        let palette = Palette::default();
        let raw = render_reviews(&vm, &palette, 40);
        assert!(raw.contains(&format!("{}★★★★★", Palette::fg(&palette.colors.accent))));
    }
}
