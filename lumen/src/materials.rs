use crate::math::Spectrum;

const INV_SQRT_3: f32 = 0.577_350_26;

/// Phong-style material snapshot carried on rays after a hit.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Material {
    pub diffuse: Spectrum,
    pub specular: Spectrum,
    pub ambient: Spectrum,
    pub emissive: Spectrum,
    /// Transmissive coefficient in [0, 1].
    pub ktran: f32,
    pub shininess: f32,
}

impl Material {
    pub fn matte(diffuse: Spectrum, ambient: Spectrum) -> Self {
        Self {
            diffuse,
            ambient,
            ..Self::default()
        }
    }

    pub fn mirror(specular: Spectrum) -> Self {
        Self {
            specular,
            shininess: 1.0,
            ..Self::default()
        }
    }

    pub fn glass(ktran: f32, specular: Spectrum) -> Self {
        Self {
            specular,
            ktran,
            shininess: 1.0,
            ..Self::default()
        }
    }

    pub fn emitter(emissive: Spectrum) -> Self {
        Self {
            emissive,
            ..Self::default()
        }
    }

    /// Emitters are treated as visually opaque sources by the path strategy.
    pub fn is_emissive(&self) -> bool {
        !self.emissive.is_black()
    }

    pub fn is_reflective(&self) -> bool {
        !self.specular.is_black()
    }

    pub fn is_transparent(&self) -> bool {
        self.ktran >= 1e-3
    }

    /// Probability of a diffuse bounce during a photon walk. Channels in
    /// [0, 1] map into [0, 1] through the 1/√3 normalization.
    pub fn diffuse_prob(&self) -> f32 {
        self.diffuse.length() * INV_SQRT_3
    }

    /// Probability of a specular bounce during a photon walk.
    pub fn specular_prob(&self) -> f32 {
        self.specular.length() * INV_SQRT_3
    }
}
