//! Alias dictionary: canonical FastBound concepts and the header names that
//! A&D records commonly use for them.

use crate::utils::normalize;

/// Standard alias groups, in lookup order.
///
/// Earlier groups win when a name appears in several (`zip`, `ffl`, `ntn`).
const STANDARD_ALIASES: &[(&str, &[&str])] = &[
    // identity
    ("serialnumber", &["serial", "serialnumber", "s/n", "sn"]),
    ("manufacturer", &["manufacturer", "maker", "make"]),
    ("importer", &["importer"]),
    ("model", &["model", "mdl"]),
    ("type", &["type", "firearmtype", "guntype"]),
    ("caliber", &["caliber", "calibre", "gauge"]),
    (
        "barrellength",
        &["barrellength", "barrel", "bbl", "lengthofbarrel", "barrellength(in)"],
    ),
    ("overalllength", &["overalllength", "oal"]),
    ("finish", &["finish", "color", "colour"]),
    (
        "countryofmanufacture",
        &["countryofmanufacture", "country", "manufacturecountry"],
    ),
    ("upc", &["upc", "barcode"]),
    ("sku", &["sku", "item#", "itemnumber", "pn", "partnumber"]),
    // acquisition
    (
        "acquisitiondate",
        &["acquisitiondate", "dateacquired", "dateofacquisition", "receiveddate"],
    ),
    (
        "acquiredfromname",
        &["acquiredfromname", "supplier", "vendor", "acquiredfrom"],
    ),
    (
        "acquiredfromaddress",
        &["acquiredfromaddress", "supplieraddress", "vendoraddress"],
    ),
    (
        "acquiredfromffl",
        &["acquiredfromffl", "supplierffl", "vendorffl", "ffl"],
    ),
    (
        "acquiredfromlicensetype",
        &["acquiredfromlicensetype", "supplierlicensetype"],
    ),
    ("acquiredfromcity", &["acquiredfromcity", "suppliercity"]),
    ("acquiredfromstate", &["acquiredfromstate", "supplierstate"]),
    (
        "acquiredfromzip",
        &["acquiredfromzip", "supplierzip", "zipcode", "zip"],
    ),
    (
        "acquisitiondocument",
        &["acquisitiondocument", "invoice", "ponumber", "po", "bo"],
    ),
    // disposition
    (
        "dispositiondate",
        &[
            "dispositiondate",
            "dateofdisposition",
            "datesold",
            "transferdate",
            "disposeddate",
        ],
    ),
    (
        "disposedtoname",
        &["disposedtoname", "customername", "buyername", "transfereename"],
    ),
    (
        "disposedtoaddress",
        &["disposedtoaddress", "customeraddress", "buyeraddress"],
    ),
    ("disposedtocity", &["disposedtocity", "customercity"]),
    ("disposedtostate", &["disposedtostate", "customerstate"]),
    ("disposedtozip", &["disposedtozip", "customerzip", "zip"]),
    (
        "disposedtoffl",
        &["disposedtoffl", "destinationffl", "receiverffl", "ffl"],
    ),
    ("form4473", &["4473", "form4473", "4473number", "4473#"]),
    (
        "nicsnumber",
        &["nicsnumber", "nics", "ntn", "backgroundchecknumber"],
    ),
    ("nicsstatus", &["nicsstatus", "backgroundstatus", "status"]),
    (
        "nicsexpiration",
        &["nicsexpiration", "nicsvaliduntil", "ntnexpire"],
    ),
    (
        "transactionnumber",
        &["transactionnumber", "trans#", "ttn", "ntn"],
    ),
    ("permitnumber", &["permit", "permitnumber", "cwfl", "ccw"]),
    ("permitexpiration", &["permitexpiration", "permitexpires"]),
    ("birthdate", &["dob", "dateofbirth", "birthdate"]),
    (
        "idnumber",
        &["idnumber", "driverlicense", "dl", "identificationnumber"],
    ),
    ("idstate", &["idstate", "dlstate"]),
    // monetary
    ("cost", &["cost", "unitcost"]),
    ("price", &["price", "saleprice", "sellingprice", "amount"]),
];

/// One canonical concept and its synonyms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasGroup {
    canonical: String,
    /// Normalized synonyms followed by the canonical key, deduplicated.
    member_keys: Vec<String>,
}

impl AliasGroup {
    pub fn new(canonical: impl Into<String>, synonyms: Vec<String>) -> Self {
        let canonical = canonical.into();
        let mut member_keys: Vec<String> = Vec::with_capacity(synonyms.len() + 1);
        for name in synonyms.iter().chain(std::iter::once(&canonical)) {
            let key = normalize(name);
            if !member_keys.contains(&key) {
                member_keys.push(key);
            }
        }
        Self {
            canonical,
            member_keys,
        }
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Normalized member names in scan order: synonyms as listed, then the
    /// canonical key.
    pub fn member_keys(&self) -> &[String] {
        &self.member_keys
    }

    fn contains_key(&self, key: &str) -> bool {
        self.member_keys.iter().any(|member| member == key)
    }
}

/// Immutable alias dictionary, consulted in definition order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasTable {
    groups: Vec<AliasGroup>,
}

impl AliasTable {
    pub fn new(groups: Vec<AliasGroup>) -> Self {
        Self { groups }
    }

    /// The built-in firearm A&D dictionary.
    pub fn standard() -> Self {
        Self::new(
            STANDARD_ALIASES
                .iter()
                .map(|(canonical, synonyms)| {
                    AliasGroup::new(
                        *canonical,
                        synonyms.iter().map(|name| (*name).to_string()).collect(),
                    )
                })
                .collect(),
        )
    }

    pub fn groups(&self) -> &[AliasGroup] {
        &self.groups
    }

    /// First group containing the normalized `key` as its canonical name or
    /// one of its synonyms.
    pub fn lookup(&self, key: &str) -> Option<&AliasGroup> {
        self.groups.iter().find(|group| group.contains_key(key))
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::standard()
    }
}
