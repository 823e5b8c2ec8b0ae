//! Style prompt builder.
//!
//! Section order is fixed:
//! Identity, Color Palette, Typography, Layout, Visual Effects,
//! Animations (only when keyframes exist), Decorative Elements,
//! Reproduction Instructions.
//!
//! Every fallback literal comes from [`PromptDefaults`]; nothing here
//! invents a value of its own.

use stylegen_analysis::extractors::{
    ColorFacts, EffectsFacts, FontFacts, KeyframeFacts, LayoutFacts, TypographyFacts,
};
use stylegen_analysis::font_names;
use stylegen_analysis::ThemeFacts;
use stylegen_core::config::PromptDefaults;

use super::mood::mood;
use super::GeneratedDocument;

const BACKGROUND_KEYS: &[&str] = &["bg", "background", "base"];
const TEXT_KEYS: &[&str] = &["text", "fg", "ink", "foreground"];
const ACCENT_KEYS: &[&str] = &["accent", "primary", "highlight"];

/// Build the style prompt for one theme.
pub fn synthesize(
    theme: &str,
    description: &str,
    facts: &ThemeFacts,
    defaults: &PromptDefaults,
) -> GeneratedDocument {
    let background = lookup(&facts.colors, BACKGROUND_KEYS).unwrap_or(&defaults.background);

    let mut output = String::with_capacity(4096);
    output.push_str(&format!("# Style Prompt: {theme}\n\n"));

    output.push_str("## Identity\n");
    output.push_str(&format!("- Theme: {theme}\n"));
    output.push_str(&format!("- Description: {description}\n"));
    output.push_str(&format!("- Mood: {}\n\n", mood(background, facts.layout.grain)));

    push_palette(&mut output, &facts.colors, background, defaults);
    push_typography(&mut output, &facts.fonts, &facts.typography, defaults);
    push_layout(&mut output, &facts.layout, defaults);
    push_effects(&mut output, &facts.effects, defaults);
    push_animations(&mut output, &facts.keyframes);
    push_decorative(&mut output, &facts.layout, defaults);
    push_instructions(&mut output, facts, defaults);

    GeneratedDocument {
        theme: theme.to_string(),
        text: output,
    }
}

fn lookup<'a>(colors: &'a ColorFacts, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| colors.get(key))
}

fn push_palette(output: &mut String, colors: &ColorFacts, background: &str, defaults: &PromptDefaults) {
    output.push_str("## Color Palette\n");
    output.push_str(&format!("- Background: {background}\n"));
    output.push_str(&format!(
        "- Text: {}\n",
        lookup(colors, TEXT_KEYS).unwrap_or(&defaults.text_color)
    ));
    output.push_str(&format!(
        "- Accent: {}\n",
        lookup(colors, ACCENT_KEYS).unwrap_or(&defaults.accent_color)
    ));

    if colors.is_empty() {
        output.push_str(&format!("- {}\n\n", defaults.palette));
        return;
    }

    output.push_str("Solid colors:\n");
    for (key, value) in colors.solid() {
        output.push_str(&format!("- {key}: {value}\n"));
    }
    let mut transparent = colors.transparent().peekable();
    if transparent.peek().is_some() {
        output.push_str("Translucent colors:\n");
        for (key, value) in transparent {
            output.push_str(&format!("- {key}: {value}\n"));
        }
    }
    output.push('\n');
}

fn push_typography(
    output: &mut String,
    fonts: &FontFacts,
    typography: &TypographyFacts,
    defaults: &PromptDefaults,
) {
    output.push_str("## Typography\n");
    output.push_str("Fonts loaded:\n");
    if fonts.is_empty() {
        output.push_str(&format!("- {}\n", defaults.fonts));
    }
    for handle in &fonts.handles {
        match font_names::resolve(handle) {
            Some(_) => output.push_str(&format!("- {handle}: {}\n", font_names::describe(handle))),
            None => output.push_str(&format!("- {handle}\n")),
        }
    }

    let or_default = |value: &Option<String>, fallback: &str| -> String {
        value.clone().unwrap_or_else(|| fallback.to_string())
    };
    output.push_str(&format!(
        "- Hero size: {}\n",
        or_default(&typography.hero_size, &defaults.hero_size)
    ));
    output.push_str(&format!(
        "- Hero weight: {}\n",
        or_default(&typography.hero_weight, &defaults.hero_weight)
    ));
    output.push_str(&format!(
        "- Hero style: {}\n",
        if typography.hero_italic { "italic" } else { "upright" }
    ));
    output.push_str(&format!(
        "- Hero letter-spacing: {}\n",
        or_default(&typography.hero_letter_spacing, &defaults.hero_letter_spacing)
    ));
    output.push_str(&format!(
        "- Hero line-height: {}\n",
        or_default(&typography.hero_line_height, &defaults.hero_line_height)
    ));
    output.push_str(&format!(
        "- Label transform: {}\n",
        or_default(&typography.label_transform, &defaults.label_transform)
    ));
    output.push_str(&format!("- Label style: {}\n\n", label_style(typography, defaults)));
}

fn label_style(typography: &TypographyFacts, defaults: &PromptDefaults) -> String {
    match typography.label_tracking {
        Some(tracking) => format!(
            "{} with {}",
            typography
                .label_transform
                .as_deref()
                .unwrap_or(&defaults.label_transform),
            tracking.description()
        ),
        None => defaults.label_style.clone(),
    }
}

fn push_layout(output: &mut String, layout: &LayoutFacts, defaults: &PromptDefaults) {
    output.push_str("## Layout\n");
    output.push_str(&format!(
        "- Max content width: {}\n",
        layout
            .max_width
            .map_or_else(|| defaults.max_width.clone(), |w| format!("{w}px"))
    ));
    output.push_str(&format!(
        "- Grid: {}\n",
        layout
            .grid_columns
            .map_or_else(|| defaults.grid.clone(), |n| format!("{n} columns"))
    ));
    output.push_str(&format!(
        "- Navigation: {}\n",
        layout.nav_style.as_deref().unwrap_or(&defaults.navigation)
    ));
    output.push_str(&format!(
        "- Projects: {}\n",
        layout
            .project_layout
            .map_or(defaults.project_layout.as_str(), |p| p.description())
    ));
    output.push_str(&format!(
        "- Background pattern: {}\n",
        if layout.grid_background {
            "grid lines drawn with linear-gradient background images"
        } else {
            defaults.background_pattern.as_str()
        }
    ));

    let motion: Vec<&str> = [
        (layout.scroll_reveal, "scroll-triggered reveals"),
        (layout.parallax, "parallax depth"),
        (layout.hover_interactions, "hover interactions"),
    ]
    .into_iter()
    .filter_map(|(present, label)| present.then_some(label))
    .collect();
    output.push_str(&format!(
        "- Motion: {}\n\n",
        if motion.is_empty() {
            defaults.motion.clone()
        } else {
            motion.join(", ")
        }
    ));
}

fn push_effects(output: &mut String, effects: &EffectsFacts, defaults: &PromptDefaults) {
    output.push_str("## Visual Effects\n");
    if effects.is_empty() {
        output.push_str(&format!("- {}\n", defaults.effects));
    }
    for label in &effects.labels {
        output.push_str(&format!("- {label}\n"));
    }
    output.push('\n');
}

fn push_animations(output: &mut String, keyframes: &KeyframeFacts) {
    if keyframes.is_empty() {
        return;
    }
    output.push_str("## Animations\n");
    for keyframe in &keyframes.keyframes {
        output.push_str(&format!("- {}: {}\n", keyframe.name, keyframe.purpose));
    }
    output.push('\n');
}

fn push_decorative(output: &mut String, layout: &LayoutFacts, defaults: &PromptDefaults) {
    output.push_str("## Decorative Elements\n");
    let elements: Vec<&str> = [
        (layout.grain, "film-grain texture overlay"),
        (layout.svg_decorations, "inline SVG illustrations and ornaments"),
        (layout.grid_background, "fine grid-line backdrop"),
    ]
    .into_iter()
    .filter_map(|(present, label)| present.then_some(label))
    .collect();

    if elements.is_empty() {
        output.push_str(&format!("- {}\n", defaults.decorative));
    }
    for element in elements {
        output.push_str(&format!("- {element}\n"));
    }
    output.push('\n');
}

fn push_instructions(output: &mut String, facts: &ThemeFacts, defaults: &PromptDefaults) {
    let fonts = if facts.fonts.is_empty() {
        defaults.fonts.clone()
    } else {
        facts
            .fonts
            .handles
            .iter()
            .map(|handle| {
                font_names::resolve(handle).map_or(handle.as_str(), |font| font.display_name)
            })
            .collect::<Vec<_>>()
            .join(", ")
    };
    let italic_policy = if facts.typography.hero_italic {
        "in italic for expressive emphasis"
    } else {
        "upright, without italics"
    };
    let effects = if facts.effects.is_empty() {
        defaults.effects.clone()
    } else {
        facts
            .effects
            .labels
            .iter()
            .take(3)
            .copied()
            .collect::<Vec<_>>()
            .join(", ")
    };

    output.push_str("## Reproduction Instructions\n");
    output.push_str(
        "1. Start from the palette above: paint full-bleed sections with the background color and reserve the accent for emphasis.\n",
    );
    output.push_str(&format!("2. Load {fonts} and set headlines {italic_policy}.\n"));
    output.push_str(&format!(
        "3. Style labels, metadata and navigation as {}.\n",
        label_style(&facts.typography, defaults)
    ));
    output.push_str(
        "4. Lay content out within the max width and grid described under Layout, keeping generous negative space.\n",
    );
    output.push_str(&format!("5. Layer the signature effects: {effects}.\n"));
    output.push_str(
        "6. Add motion with restraint: reveal sections as they enter the viewport and give every interactive element a hover state.\n",
    );
    output.push_str(
        "7. Check each section against this prompt so color, type and effects stay consistent.\n",
    );
}
