//! Fixed-order decoder for the legacy Gaia EDR3 `gaia_source` schema.
//!
//! Some archival extracts ship without a usable header, relying on the
//! published EDR3 column sequence instead. [`GaiaSource`] decodes such rows
//! through a typed constructor: the value count must match the declared
//! column list exactly, and access goes through named accessors rather than
//! positional unpacking.

use csv::StringRecord;

use super::reader::parse_value;
use crate::error::{Result, UraniaError};

/// The Gaia EDR3 `gaia_source` column sequence, in publication order.
///
/// This list is the schema contract for [`GaiaSource::from_ordered`]; its
/// length is the decoder's expected arity.
pub const GAIA_EDR3_COLUMNS: [&str; 99] = [
    "solution_id",
    "designation",
    "source_id",
    "random_index",
    "ref_epoch",
    "ra",
    "ra_error",
    "dec",
    "dec_error",
    "parallax",
    "parallax_error",
    "parallax_over_error",
    "pm",
    "pmra",
    "pmra_error",
    "pmdec",
    "pmdec_error",
    "ra_dec_corr",
    "ra_parallax_corr",
    "ra_pmra_corr",
    "ra_pmdec_corr",
    "dec_parallax_corr",
    "dec_pmra_corr",
    "dec_pmdec_corr",
    "parallax_pmra_corr",
    "parallax_pmdec_corr",
    "pmra_pmdec_corr",
    "astrometric_n_obs_al",
    "astrometric_n_obs_ac",
    "astrometric_n_good_obs_al",
    "astrometric_n_bad_obs_al",
    "astrometric_gof_al",
    "astrometric_chi2_al",
    "astrometric_excess_noise",
    "astrometric_excess_noise_sig",
    "astrometric_params_solved",
    "astrometric_primary_flag",
    "nu_eff_used_in_astrometry",
    "pseudocolour",
    "pseudocolour_error",
    "ra_pseudocolour_corr",
    "dec_pseudocolour_corr",
    "parallax_pseudocolour_corr",
    "pmra_pseudocolour_corr",
    "pmdec_pseudocolour_corr",
    "astrometric_matched_transits",
    "visibility_periods_used",
    "astrometric_sigma5d_max",
    "matched_transits",
    "new_matched_transits",
    "matched_transits_removed",
    "ipd_gof_harmonic_amplitude",
    "ipd_gof_harmonic_phase",
    "ipd_frac_multi_peak",
    "ipd_frac_odd_win",
    "ruwe",
    "scan_direction_strength_k1",
    "scan_direction_strength_k2",
    "scan_direction_strength_k3",
    "scan_direction_strength_k4",
    "scan_direction_mean_k1",
    "scan_direction_mean_k2",
    "scan_direction_mean_k3",
    "scan_direction_mean_k4",
    "duplicated_source",
    "phot_g_n_obs",
    "phot_g_mean_flux",
    "phot_g_mean_flux_error",
    "phot_g_mean_flux_over_error",
    "phot_g_mean_mag",
    "phot_bp_n_obs",
    "phot_bp_mean_flux",
    "phot_bp_mean_flux_error",
    "phot_bp_mean_flux_over_error",
    "phot_bp_mean_mag",
    "phot_rp_n_obs",
    "phot_rp_mean_flux",
    "phot_rp_mean_flux_error",
    "phot_rp_mean_flux_over_error",
    "phot_rp_mean_mag",
    "phot_bp_n_contaminated_transits",
    "phot_bp_n_blended_transits",
    "phot_rp_n_contaminated_transits",
    "phot_rp_n_blended_transits",
    "phot_proc_mode",
    "phot_bp_rp_excess_factor",
    "bp_rp",
    "bp_g",
    "g_rp",
    "dr2_radial_velocity",
    "dr2_radial_velocity_error",
    "dr2_rv_nb_transits",
    "dr2_rv_template_teff",
    "dr2_rv_template_logg",
    "dr2_rv_template_fe_h",
    "l",
    "b",
    "ecl_lon",
    "ecl_lat",
];

// Accessor indices into GAIA_EDR3_COLUMNS; cross-checked by tests.
const IDX_SOURCE_ID: usize = 2;
const IDX_RA: usize = 5;
const IDX_DEC: usize = 7;
const IDX_PARALLAX: usize = 9;
const IDX_PMRA: usize = 13;
const IDX_PMDEC: usize = 15;
const IDX_RUWE: usize = 55;
const IDX_PHOT_G_MEAN_MAG: usize = 69;
const IDX_BP_RP: usize = 86;
const IDX_DR2_RV_TEMPLATE_FE_H: usize = 94;

/// One decoded row of the legacy fixed-order Gaia EDR3 schema.
///
/// Values are parsed on construction; anything absent or non-finite reads
/// back as `None`.
pub struct GaiaSource {
    values: Vec<Option<f64>>,
}

impl GaiaSource {
    /// Decode an ordered value sequence.
    ///
    /// Fails with [`UraniaError::Arity`] unless exactly
    /// `GAIA_EDR3_COLUMNS.len()` values are supplied.
    pub fn from_ordered<'a, I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let values: Vec<Option<f64>> = values.into_iter().map(|v| parse_value(Some(v))).collect();

        if values.len() != GAIA_EDR3_COLUMNS.len() {
            return Err(UraniaError::Arity {
                expected: GAIA_EDR3_COLUMNS.len(),
                got: values.len(),
            });
        }

        Ok(Self { values })
    }

    /// Decode a raw CSV record
    pub fn from_record(record: &StringRecord) -> Result<Self> {
        Self::from_ordered(record.iter())
    }

    /// Look up a value by its EDR3 column name
    pub fn field(&self, name: &str) -> Option<f64> {
        let idx = GAIA_EDR3_COLUMNS.iter().position(|c| *c == name)?;
        self.values[idx]
    }

    pub fn source_id(&self) -> Option<f64> {
        self.values[IDX_SOURCE_ID]
    }

    pub fn ra(&self) -> Option<f64> {
        self.values[IDX_RA]
    }

    pub fn dec(&self) -> Option<f64> {
        self.values[IDX_DEC]
    }

    pub fn parallax(&self) -> Option<f64> {
        self.values[IDX_PARALLAX]
    }

    pub fn pmra(&self) -> Option<f64> {
        self.values[IDX_PMRA]
    }

    pub fn pmdec(&self) -> Option<f64> {
        self.values[IDX_PMDEC]
    }

    pub fn ruwe(&self) -> Option<f64> {
        self.values[IDX_RUWE]
    }

    pub fn phot_g_mean_mag(&self) -> Option<f64> {
        self.values[IDX_PHOT_G_MEAN_MAG]
    }

    pub fn bp_rp(&self) -> Option<f64> {
        self.values[IDX_BP_RP]
    }

    pub fn dr2_rv_template_fe_h(&self) -> Option<f64> {
        self.values[IDX_DR2_RV_TEMPLATE_FE_H]
    }
}
