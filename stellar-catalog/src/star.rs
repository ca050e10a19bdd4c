//! Star record types.
//!
//! [`Star`] is the catalog entry returned in bulk by
//! [`CatalogReader::read_stars`](crate::CatalogReader::read_stars);
//! [`StarDetail`] carries the rarely-needed extended attributes fetched on
//! demand by [`CatalogReader::star_details`](crate::CatalogReader::star_details).
//! The two are deliberately never merged: details are decoded fresh per
//! lookup and not cached.

/// One bright-star catalog entry.
///
/// Positions are catalog-epoch decimal degrees. Optional fields are `None`
/// exactly when the source column is blank (or excluded, for the variable
/// name) — never zero, never a sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    /// HR number, globally unique across both catalog files.
    ///
    /// Primary records carry it in the file; supplement records continue
    /// the numbering after the primary file's line count.
    pub number: u16,
    /// Fixed ten-character Bayer/Flamsteed designation, padding preserved.
    /// Ten blanks for supplement records.
    pub name: String,
    /// Henry Draper catalog cross-reference.
    pub hd_number: Option<String>,
    /// SAO catalog cross-reference.
    pub sao_number: Option<u32>,
    /// FK5 catalog cross-reference. Not present in the supplement format.
    pub fk5_number: Option<u16>,
    /// Variable-star designation, excluded when it is a placeholder token
    /// or merely repeats the Bayer letter of [`name`](Self::name).
    pub variable_name: Option<String>,
    /// Right ascension in degrees, [0, 360).
    pub ra: f64,
    /// Declination in degrees, signed.
    pub dec: f64,
    /// Proper motion in right ascension, arcsec/yr.
    pub pm_ra: Option<f64>,
    /// Proper motion in declination, arcsec/yr.
    pub pm_dec: Option<f64>,
    /// Visual magnitude.
    pub mag: f32,
    /// Single-character color index code.
    pub color: char,
    /// Proper name resolved at load time from the caller's name dictionary.
    pub proper_name: Option<String>,
}

impl Star {
    /// Ordered candidate identifier strings for name resolution.
    ///
    /// Only non-empty identifiers appear: the trimmed designation first,
    /// then the cross-index numbers in `HD n` / `SAO n` / `FK5 n` / `HR n`
    /// form, then the variable-star name. Computed on demand; the list is
    /// not stored.
    pub fn identifiers(&self) -> Vec<String> {
        let mut ids = Vec::new();
        let designation = self.name.trim();
        if !designation.is_empty() {
            ids.push(designation.to_string());
        }
        if let Some(hd) = &self.hd_number {
            ids.push(format!("HD {hd}"));
        }
        if let Some(sao) = self.sao_number {
            ids.push(format!("SAO {sao}"));
        }
        if let Some(fk5) = self.fk5_number {
            ids.push(format!("FK5 {fk5}"));
        }
        ids.push(format!("HR {}", self.number));
        if let Some(var) = &self.variable_name {
            ids.push(var.clone());
        }
        ids
    }
}

/// Extended attributes of one star, looked up independently of [`Star`].
///
/// Supplement records only provide the spectral class; the remaining fields
/// come back absent/false for them.
#[derive(Debug, Clone, PartialEq)]
pub struct StarDetail {
    /// Heliocentric radial velocity, km/s.
    pub radial_velocity: Option<i32>,
    /// Set when the record is flagged as an infrared source.
    pub is_infrared_source: bool,
    /// Spectral classification, trimmed.
    pub spectral_class: String,
    /// Spectral peculiarity code, empty when absent.
    pub peculiarity: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star() -> Star {
        Star {
            number: 2061,
            name: " 58Alp Ori".to_string(),
            hd_number: Some("39801".to_string()),
            sao_number: Some(113271),
            fk5_number: Some(224),
            variable_name: None,
            ra: 88.79293,
            dec: 7.407064,
            pm_ra: Some(0.026),
            pm_dec: Some(0.009),
            mag: 0.5,
            color: 'R',
            proper_name: None,
        }
    }

    #[test]
    fn test_identifiers_order() {
        assert_eq!(
            star().identifiers(),
            vec!["58Alp Ori", "HD 39801", "SAO 113271", "FK5 224", "HR 2061"]
        );
    }

    #[test]
    fn test_identifiers_skip_absent() {
        let mut s = star();
        s.name = "          ".to_string();
        s.hd_number = None;
        s.fk5_number = None;
        s.variable_name = Some("VV Cep".to_string());
        assert_eq!(s.identifiers(), vec!["SAO 113271", "HR 2061", "VV Cep"]);
    }
}
