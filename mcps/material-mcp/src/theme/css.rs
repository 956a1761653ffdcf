//! CSS custom-property serialization

use crate::color::{Tone, CANONICAL_TONES};
use crate::scheme::ColorScheme;
use crate::tonal::CorePalettes;

/// Render palette stops and scheme roles as CSS custom properties
///
/// The light scheme lands in `:root`. When a dark scheme is given it is
/// emitted twice: under `prefers-color-scheme: dark` and under a
/// `[data-theme="<name>-dark"]` selector for manual switching.
pub fn render_css(
    name: &str,
    palettes: &CorePalettes,
    light: &ColorScheme,
    dark: Option<&ColorScheme>,
) -> String {
    let mut output = String::new();

    output.push_str(":root {\n");
    output.push_str(&format!("  /* {} theme - Tonal Palettes */\n", name));
    output.push_str(&palette_variables(palettes));
    output.push_str("\n  /* Light Theme - System Color Assignments */\n");
    output.push_str(&role_variables(light, "  "));
    output.push_str("}\n\n");

    output.push_str("/* Theme selector class */\n");
    output.push_str(&format!(".theme-{} {{\n", name));
    output.push_str(&role_variables(light, "  "));
    output.push_str("}\n");

    if let Some(dark) = dark {
        output.push_str("\n/* Dark Theme */\n");
        output.push_str("@media (prefers-color-scheme: dark) {\n  :root {\n");
        output.push_str(&role_variables(dark, "    "));
        output.push_str("  }\n}\n\n");

        output.push_str(&format!("[data-theme=\"{}-dark\"] {{\n", name));
        output.push_str(&role_variables(dark, "  "));
        output.push_str("}\n");
    }

    output
}

fn palette_variables(palettes: &CorePalettes) -> String {
    let mut output = String::new();

    for (axis, palette) in palettes.iter() {
        output.push_str(&format!("\n  /* {} Tones */\n", axis.label()));
        for tone in CANONICAL_TONES {
            output.push_str(&format!(
                "  --md-sys-color-{}-{}: {};\n",
                axis.palette_key(),
                tone,
                palette.tone(Tone::from(tone))
            ));
        }
    }

    output
}

fn role_variables(scheme: &ColorScheme, indent: &str) -> String {
    scheme
        .roles
        .iter()
        .map(|role| format!("{}--md-sys-color-{}: {};\n", indent, role.name, role.color))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::color::testing::LinearColorSpace;
    use crate::color::{Argb, ColorSpace};
    use crate::scheme::{build_scheme, SchemeMode, ROLE_BINDINGS};
    use crate::tonal::{generate_palette, PaletteAxis};

    fn fixtures() -> (CorePalettes, ColorScheme, ColorScheme) {
        let space: Arc<dyn ColorSpace> = Arc::new(LinearColorSpace);
        let palettes = generate_palette(&space, Argb::from_rgb(100, 85, 20));
        let light = build_scheme(&palettes, SchemeMode::Light).unwrap();
        let dark = build_scheme(&palettes, SchemeMode::Dark).unwrap();
        (palettes, light, dark)
    }

    #[test]
    fn test_light_only() {
        let (palettes, light, _) = fixtures();
        let css = render_css("ocean", &palettes, &light, None);

        assert!(css.starts_with(":root {"));
        assert!(css.contains(".theme-ocean {"));
        assert!(!css.contains("prefers-color-scheme"));
        assert!(!css.contains("data-theme"));
    }

    #[test]
    fn test_every_palette_stop_declared() {
        let (palettes, light, _) = fixtures();
        let css = render_css("ocean", &palettes, &light, None);

        for axis in PaletteAxis::ALL {
            assert!(css.contains(&format!("/* {} Tones */", axis.label())));
            for tone in CANONICAL_TONES {
                assert!(css.contains(&format!("--md-sys-color-{}-{}: #", axis.palette_key(), tone)));
            }
        }
    }

    #[test]
    fn test_neutral_variant_palette_key_is_camel_case() {
        let (palettes, light, _) = fixtures();
        let css = render_css("ocean", &palettes, &light, None);

        assert!(css.contains("--md-sys-color-neutralVariant-50: #"));
        assert!(!css.contains("--md-sys-color-neutral-variant-"));
    }

    #[test]
    fn test_dark_block_in_both_places() {
        let (palettes, light, dark) = fixtures();
        let css = render_css("ocean", &palettes, &light, Some(&dark));

        assert!(css.contains("@media (prefers-color-scheme: dark) {"));
        assert!(css.contains("[data-theme=\"ocean-dark\"] {"));

        let dark_primary = format!(
            "--md-sys-color-primary: {};",
            dark.color(crate::scheme::SchemeRole::Primary).unwrap()
        );
        assert_eq!(css.matches(&dark_primary).count(), 2);

        for binding in &ROLE_BINDINGS {
            let declaration = format!("--md-sys-color-{}: ", binding.role.css_name());
            // light :root, theme class, dark media query, dark selector
            assert_eq!(css.matches(&declaration).count(), 4, "{declaration}");
        }
    }
}
