//! Scheme building
//!
//! Binds every Material color role to a (palette axis, tone) pair per mode and
//! resolves it against a set of [`CorePalettes`]. The binding table is fixed
//! design data mirroring the Material 3 baseline schemes.

use serde::{Deserialize, Serialize};

use crate::color::{Argb, ColorSpace, Tone};
use crate::error::{ColorError, ColorResult};
use crate::report::SchemeTones;
use crate::tonal::{CorePalettes, PaletteAxis};

/// Light or dark scheme
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SchemeMode {
    Light,
    Dark,
}

impl SchemeMode {
    pub fn label(self) -> &'static str {
        match self {
            SchemeMode::Light => "Light",
            SchemeMode::Dark => "Dark",
        }
    }
}

/// A named Material color role
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SchemeRole {
    Primary,
    OnPrimary,
    PrimaryContainer,
    OnPrimaryContainer,
    Secondary,
    OnSecondary,
    SecondaryContainer,
    OnSecondaryContainer,
    Tertiary,
    OnTertiary,
    TertiaryContainer,
    OnTertiaryContainer,
    Error,
    OnError,
    ErrorContainer,
    OnErrorContainer,
    Background,
    OnBackground,
    Surface,
    OnSurface,
    SurfaceVariant,
    OnSurfaceVariant,
    Outline,
    OutlineVariant,
    Shadow,
    Scrim,
    InverseSurface,
    InverseOnSurface,
    InversePrimary,
}

impl SchemeRole {
    /// Kebab-case name used for `--md-sys-color-<role>`
    pub fn css_name(self) -> &'static str {
        match self {
            SchemeRole::Primary => "primary",
            SchemeRole::OnPrimary => "on-primary",
            SchemeRole::PrimaryContainer => "primary-container",
            SchemeRole::OnPrimaryContainer => "on-primary-container",
            SchemeRole::Secondary => "secondary",
            SchemeRole::OnSecondary => "on-secondary",
            SchemeRole::SecondaryContainer => "secondary-container",
            SchemeRole::OnSecondaryContainer => "on-secondary-container",
            SchemeRole::Tertiary => "tertiary",
            SchemeRole::OnTertiary => "on-tertiary",
            SchemeRole::TertiaryContainer => "tertiary-container",
            SchemeRole::OnTertiaryContainer => "on-tertiary-container",
            SchemeRole::Error => "error",
            SchemeRole::OnError => "on-error",
            SchemeRole::ErrorContainer => "error-container",
            SchemeRole::OnErrorContainer => "on-error-container",
            SchemeRole::Background => "background",
            SchemeRole::OnBackground => "on-background",
            SchemeRole::Surface => "surface",
            SchemeRole::OnSurface => "on-surface",
            SchemeRole::SurfaceVariant => "surface-variant",
            SchemeRole::OnSurfaceVariant => "on-surface-variant",
            SchemeRole::Outline => "outline",
            SchemeRole::OutlineVariant => "outline-variant",
            SchemeRole::Shadow => "shadow",
            SchemeRole::Scrim => "scrim",
            SchemeRole::InverseSurface => "inverse-surface",
            SchemeRole::InverseOnSurface => "inverse-on-surface",
            SchemeRole::InversePrimary => "inverse-primary",
        }
    }
}

/// Where a role draws its color from in each mode
#[derive(Clone, Copy, Debug)]
pub struct RoleBinding {
    pub role: SchemeRole,
    pub axis: PaletteAxis,
    pub light_tone: u8,
    pub dark_tone: u8,
}

impl RoleBinding {
    pub fn tone(&self, mode: SchemeMode) -> u8 {
        match mode {
            SchemeMode::Light => self.light_tone,
            SchemeMode::Dark => self.dark_tone,
        }
    }
}

const fn bind(role: SchemeRole, axis: PaletteAxis, light_tone: u8, dark_tone: u8) -> RoleBinding {
    RoleBinding {
        role,
        axis,
        light_tone,
        dark_tone,
    }
}

/// Material 3 baseline role bindings, in CSS emission order
pub static ROLE_BINDINGS: [RoleBinding; 29] = [
    bind(SchemeRole::Primary, PaletteAxis::Primary, 40, 80),
    bind(SchemeRole::OnPrimary, PaletteAxis::Primary, 100, 20),
    bind(SchemeRole::PrimaryContainer, PaletteAxis::Primary, 90, 30),
    bind(SchemeRole::OnPrimaryContainer, PaletteAxis::Primary, 10, 90),
    bind(SchemeRole::Secondary, PaletteAxis::Secondary, 40, 80),
    bind(SchemeRole::OnSecondary, PaletteAxis::Secondary, 100, 20),
    bind(SchemeRole::SecondaryContainer, PaletteAxis::Secondary, 90, 30),
    bind(SchemeRole::OnSecondaryContainer, PaletteAxis::Secondary, 10, 90),
    bind(SchemeRole::Tertiary, PaletteAxis::Tertiary, 40, 80),
    bind(SchemeRole::OnTertiary, PaletteAxis::Tertiary, 100, 20),
    bind(SchemeRole::TertiaryContainer, PaletteAxis::Tertiary, 90, 30),
    bind(SchemeRole::OnTertiaryContainer, PaletteAxis::Tertiary, 10, 90),
    bind(SchemeRole::Surface, PaletteAxis::Neutral, 99, 10),
    bind(SchemeRole::OnSurface, PaletteAxis::Neutral, 10, 90),
    bind(SchemeRole::SurfaceVariant, PaletteAxis::NeutralVariant, 90, 30),
    bind(SchemeRole::OnSurfaceVariant, PaletteAxis::NeutralVariant, 30, 80),
    bind(SchemeRole::Background, PaletteAxis::Neutral, 99, 10),
    bind(SchemeRole::OnBackground, PaletteAxis::Neutral, 10, 90),
    bind(SchemeRole::Error, PaletteAxis::Error, 40, 80),
    bind(SchemeRole::OnError, PaletteAxis::Error, 100, 20),
    bind(SchemeRole::ErrorContainer, PaletteAxis::Error, 90, 30),
    bind(SchemeRole::OnErrorContainer, PaletteAxis::Error, 10, 90),
    bind(SchemeRole::Outline, PaletteAxis::NeutralVariant, 50, 60),
    bind(SchemeRole::OutlineVariant, PaletteAxis::NeutralVariant, 80, 30),
    bind(SchemeRole::InverseSurface, PaletteAxis::Neutral, 20, 90),
    bind(SchemeRole::InverseOnSurface, PaletteAxis::Neutral, 95, 20),
    bind(SchemeRole::InversePrimary, PaletteAxis::Primary, 80, 40),
    bind(SchemeRole::Shadow, PaletteAxis::Neutral, 0, 0),
    bind(SchemeRole::Scrim, PaletteAxis::Neutral, 0, 0),
];

/// A role resolved to a concrete color
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedRole {
    pub role: SchemeRole,
    pub name: &'static str,
    pub axis: PaletteAxis,
    pub tone: u8,
    pub color: Argb,
}

/// Every role of one mode, resolved
#[derive(Clone, Debug, Serialize)]
pub struct ColorScheme {
    pub mode: SchemeMode,
    pub roles: Vec<ResolvedRole>,
}

impl ColorScheme {
    pub fn get(&self, role: SchemeRole) -> ColorResult<&ResolvedRole> {
        self.roles
            .iter()
            .find(|r| r.role == role)
            .ok_or_else(|| ColorError::IncompleteScheme(role.css_name().to_string()))
    }

    pub fn color(&self, role: SchemeRole) -> ColorResult<Argb> {
        self.get(role).map(|r| r.color)
    }

    /// Measured tones of the roles the accessibility report checks
    ///
    /// Tones are read back from the resolved colors rather than the binding
    /// table, so gamut mapping and 8-bit rounding are accounted for.
    pub fn report_tones(&self, space: &dyn ColorSpace) -> ColorResult<SchemeTones> {
        let tone = |role| -> ColorResult<f64> { Ok(space.hct_from_argb(self.color(role)?).tone) };

        Ok(SchemeTones {
            primary: tone(SchemeRole::Primary)?,
            on_primary: tone(SchemeRole::OnPrimary)?,
            secondary: tone(SchemeRole::Secondary)?,
            on_secondary: tone(SchemeRole::OnSecondary)?,
            surface: tone(SchemeRole::Surface)?,
            on_surface: tone(SchemeRole::OnSurface)?,
            background: tone(SchemeRole::Background)?,
            on_background: tone(SchemeRole::OnBackground)?,
            error: tone(SchemeRole::Error)?,
            on_error: tone(SchemeRole::OnError)?,
        })
    }
}

/// Resolve every role for `mode` against `palettes`
pub fn build_scheme(palettes: &CorePalettes, mode: SchemeMode) -> ColorResult<ColorScheme> {
    let roles: Vec<ResolvedRole> = ROLE_BINDINGS
        .iter()
        .map(|binding| {
            let tone = binding.tone(mode);
            ResolvedRole {
                role: binding.role,
                name: binding.role.css_name(),
                axis: binding.axis,
                tone,
                color: palettes.palette(binding.axis).tone(Tone::from(tone)),
            }
        })
        .collect();

    let scheme = ColorScheme { mode, roles };
    for binding in &ROLE_BINDINGS {
        scheme.get(binding.role)?;
    }

    Ok(scheme)
}
