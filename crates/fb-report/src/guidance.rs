//! Remediation hints for FastBound columns that could not be mapped.
//!
//! Hints come from an ordered rule list. Every rule whose keywords occur in
//! the normalized column name contributes its hint; hints are joined in rule
//! order with [`HINT_SEPARATOR`]. When no rule applies, [`FALLBACK_HINT`] is
//! used instead.

/// Separator between hints of several matching rules.
pub const HINT_SEPARATOR: &str = " | ";

/// Hint used when no rule matches.
pub const FALLBACK_HINT: &str =
    "Check inbound paperwork, Form 4473, FFL copies and the physical markings.";

/// A keyword rule producing one hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuidanceRule {
    pub name: &'static str,
    /// Substrings looked up in the normalized column name.
    pub keywords: &'static [&'static str],
    pub hint: &'static str,
}

impl GuidanceRule {
    /// True when any keyword occurs in `key` (a normalized column name).
    pub fn matches(&self, key: &str) -> bool {
        self.keywords.iter().any(|keyword| key.contains(keyword))
    }
}

pub const GUIDANCE_RULES: &[GuidanceRule] = &[
    GuidanceRule {
        name: "serial",
        keywords: &["serial", "sn"],
        hint: "Serial number: marking on the firearm, Form 4473 or the prior record.",
    },
    GuidanceRule {
        name: "manufacturer",
        keywords: &["manufacturer", "mfr", "maker", "make"],
        hint: "Manufacturer: frame/receiver marking; supplier invoice.",
    },
    GuidanceRule {
        name: "importer",
        keywords: &["importer"],
        hint: "Importer: barrel/frame marking; inbound invoice.",
    },
    GuidanceRule {
        name: "model",
        keywords: &["model"],
        hint: "Model: marking on the firearm; invoice or packing slip.",
    },
    GuidanceRule {
        name: "caliber",
        keywords: &["caliber", "gauge"],
        hint: "Caliber/gauge: stamped on the barrel or slide; manufacturer spec sheet.",
    },
    GuidanceRule {
        name: "type",
        keywords: &["type"],
        hint: "Type: pistol, revolver, rifle, shotgun, receiver or other.",
    },
    GuidanceRule {
        name: "length",
        keywords: &["barrel", "length", "oal"],
        hint: "Barrel length/OAL: manufacturer spec sheet; physical inspection.",
    },
    GuidanceRule {
        name: "finish",
        keywords: &["finish", "color"],
        hint: "Finish/color: inspection or manufacturer description.",
    },
    GuidanceRule {
        name: "upc_sku",
        keywords: &["upc", "sku"],
        hint: "UPC/SKU: product box; invoice.",
    },
    GuidanceRule {
        name: "acquisition",
        keywords: &["acq", "acquisition", "received", "source", "supplier", "vendor"],
        hint: "Acquisition data: supplier, date, invoice/PO.",
    },
    GuidanceRule {
        name: "disposition",
        keywords: &["dispo", "dispose", "transferee", "customer", "buyer", "4473"],
        hint: "Disposition data: customer or FFL, date, Form 4473, NICS.",
    },
    GuidanceRule {
        name: "background_check",
        keywords: &["nics", "ttn", "poc", "background"],
        hint: "Background check: NICS/POC transaction number, status and expiration.",
    },
    GuidanceRule {
        name: "license",
        keywords: &["ffl", "license"],
        hint: "FFL: recipient license number and expiration; copy on file.",
    },
    GuidanceRule {
        name: "monetary",
        keywords: &["cost", "price", "amount", "msrp"],
        hint: "Amounts: cost/price from the ERP or invoice.",
    },
];

/// Guidance text for a normalized column name.
pub fn guidance_for_key(key: &str) -> String {
    let hints: Vec<&str> = GUIDANCE_RULES
        .iter()
        .filter(|rule| rule.matches(key))
        .map(|rule| rule.hint)
        .collect();
    if hints.is_empty() {
        FALLBACK_HINT.to_string()
    } else {
        hints.join(HINT_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str) -> &'static GuidanceRule {
        GUIDANCE_RULES
            .iter()
            .find(|rule| rule.name == name)
            .expect("rule exists")
    }

    #[test]
    fn serial_rule() {
        assert!(rule("serial").matches("serialnumber"));
        assert!(rule("serial").matches("sn"));
        assert!(!rule("serial").matches("model"));
    }

    #[test]
    fn manufacturer_rule() {
        assert!(rule("manufacturer").matches("mfr"));
        assert!(rule("manufacturer").matches("makecode"));
        assert!(!rule("manufacturer").matches("importer"));
    }

    #[test]
    fn importer_rule() {
        assert!(rule("importer").matches("importername"));
        assert!(!rule("importer").matches("import"));
    }

    #[test]
    fn model_rule() {
        assert!(rule("model").matches("modelnumber"));
        assert!(!rule("model").matches("mdl"));
    }

    #[test]
    fn caliber_and_type_rules() {
        assert!(rule("caliber").matches("calibergauge"));
        assert!(rule("type").matches("firearmtype"));
        assert!(!rule("type").matches("caliber"));
    }

    #[test]
    fn length_rule() {
        assert!(rule("length").matches("barrellength"));
        assert!(rule("length").matches("oal"));
        assert!(rule("length").matches("overalllength"));
    }

    #[test]
    fn finish_and_upc_rules() {
        assert!(rule("finish").matches("color"));
        assert!(rule("upc_sku").matches("upccode"));
        assert!(rule("upc_sku").matches("sku"));
    }

    #[test]
    fn acquisition_rule() {
        assert!(rule("acquisition").matches("acquisitiondate"));
        assert!(rule("acquisition").matches("vendorname"));
        assert!(rule("acquisition").matches("datereceived"));
    }

    #[test]
    fn disposition_rule() {
        assert!(rule("disposition").matches("dispositiondate"));
        assert!(rule("disposition").matches("customername"));
        assert!(rule("disposition").matches("form4473"));
    }

    #[test]
    fn background_and_license_rules() {
        assert!(rule("background_check").matches("nicsstatus"));
        assert!(rule("background_check").matches("pocnumber"));
        assert!(rule("license").matches("ffllicensenumber"));
    }

    #[test]
    fn monetary_rule() {
        assert!(rule("monetary").matches("unitcost"));
        assert!(rule("monetary").matches("msrp"));
        assert!(!rule("monetary").matches("model"));
    }

    #[test]
    fn hints_follow_rule_order() {
        let text = guidance_for_key("acquiredfromffl");
        assert_eq!(
            text,
            format!(
                "{}{HINT_SEPARATOR}{}",
                rule("acquisition").hint,
                rule("license").hint
            )
        );
    }

    #[test]
    fn fallback_when_nothing_matches() {
        assert_eq!(guidance_for_key("unmappedfield"), FALLBACK_HINT);
        assert_eq!(guidance_for_key(""), FALLBACK_HINT);
    }
}
