//! Tailwind theme-extension serialization

use crate::color::{Tone, CANONICAL_TONES};
use crate::tonal::{CorePalettes, PaletteAxis};

/// Tone used for an axis' `DEFAULT` key
fn default_tone(axis: PaletteAxis) -> u8 {
    match axis {
        PaletteAxis::Neutral | PaletteAxis::NeutralVariant => 50,
        _ => 40,
    }
}

/// Render a `module.exports` Tailwind config with one `md-<axis>` color
/// object per palette axis
pub fn render_tailwind(name: &str, palettes: &CorePalettes) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "// Tailwind CSS theme extension for {} (Material Design 3)\n",
        name
    ));
    output.push_str("module.exports = {\n  theme: {\n    extend: {\n      colors: {\n");

    for (axis, palette) in palettes.iter() {
        output.push_str(&format!("        'md-{}': {{\n", axis.css_name()));
        for tone in CANONICAL_TONES {
            output.push_str(&format!(
                "          {}: '{}',\n",
                tone,
                palette.tone(Tone::from(tone))
            ));
        }
        let fallback = default_tone(axis);
        output.push_str(&format!(
            "          DEFAULT: '{}', // tone {}\n",
            palette.tone(Tone::from(fallback)),
            fallback
        ));
        output.push_str("        },\n");
    }

    output.push_str("      },\n    },\n  },\n};\n");
    output
}
