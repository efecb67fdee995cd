//! Where each index formula comes from.
//!
//! Most entries point at the Index DataBase (indexdatabase.de) page of the
//! formula for the Landsat 8 OLI sensor.

/// Index name to formula source.
pub const REFERENCES: &[(&str, &str)] = &[
    ("ndvi", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=58&sensor_id=168"),
    ("atsavi", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=209&sensor_id=168"),
    ("afri1600", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=393&sensor_id=168"),
    ("alteration", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=1&sensor_id=168"),
    ("avi", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=574&sensor_id=168"),
    ("arvi2", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=396&sensor_id=168"),
    ("bwdrvi", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=136&sensor_id=168"),
    ("ci_green", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=128&sensor_id=168"),
    ("cvi", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=391&sensor_id=168"),
    ("ci", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=11&sensor_id=168"),
    ("ctvi", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=244&sensor_id=168"),
    ("cri550", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=253&sensor_id=168"),
    ("gdvi", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=27&sensor_id=168"),
    ("dvimss", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=569&sensor_id=168"),
    ("evi", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=16&sensor_id=168"),
    ("evi2", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=237&sensor_id=168"),
    ("evi22", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=576&sensor_id=168"),
    ("fe2plus", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=18&sensor_id=168"),
    ("ferricoxides", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=20&sensor_id=168"),
    ("ferrous_iron", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=21&sensor_id=168"),
    ("ferrous_silicates", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=22&sensor_id=168"),
    ("gemi", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=25&sensor_id=168"),
    ("gvmi", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=372&sensor_id=168"),
    ("gossan", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=26&sensor_id=168"),
    ("gari", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=363&sensor_id=168"),
    ("gli", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=375&sensor_id=168"),
    ("gndvi", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=28&sensor_id=168"),
    ("gosavi", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=29&sensor_id=168"),
    ("gsavi", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=31&sensor_id=168"),
    ("gbndvi", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=186&sensor_id=168"),
    ("grndvi", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=186&sensor_id=168"),
    ("hue", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=186&sensor_id=168"),
    ("intensity", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=36&sensor_id=168"),
    ("laterite", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=38&sensor_id=168"),
    ("logratio", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=243&sensor_id=168"),
    ("mcrig", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=257&sensor_id=168"),
    ("mvi", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=257&sensor_id=168"),
    ("msrnir_red", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=362&sensor_id=168"),
    ("norm_nir", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=51&sensor_id=168"),
    ("norm_r", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=52&sensor_id=168"),
    ("norm_g", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=50&sensor_id=168"),
    ("nli", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=111&sensor_id=168"),
    ("ppr", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=483&sensor_id=168"),
    ("pvr", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=484&sensor_id=168"),
    ("siwsi", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=219&sensor_id=168"),
    ("bndvi", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=219&sensor_id=168"),
    ("mndvi", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=245&sensor_id=168"),
    ("ri", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=74&sensor_id=168"),
    ("ndsi", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=57&sensor_id=168"),
    ("ndvic", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=377&sensor_id=168"),
    ("pndvi", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=377&sensor_id=168"),
    ("rbndvi", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=187&sensor_id=168"),
    ("if_index", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=79&sensor_id=168"),
    ("tm5_tm7", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=337&sensor_id=168"),
    ("bgi", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=210&sensor_id=168"),
    ("sr550_670", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=316&sensor_id=168"),
    ("sr860_550", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=343&sensor_id=168"),
    ("rdi", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=71&sensor_id=168"),
    ("srmir_red", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=14&sensor_id=168"),
    ("grvi", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=30&sensor_id=168"),
    ("srnir_mir", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=479&sensor_id=168"),
    ("dvi", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=479&sensor_id=168"),
    ("io", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=203&sensor_id=168"),
    ("rgr", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=213&sensor_id=168"),
    ("ssred_nir", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=568&sensor_id=168"),
    ("swir1_nir", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=205&sensor_id=168"),
    ("sarvi2", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=387&sensor_id=168"),
    ("sbl", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=353&sensor_id=168"),
    ("sci", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=88&sensor_id=168"),
    ("slavi", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=89&sensor_id=168"),
    ("sqrt_nir_ir", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=200&sensor_id=168"),
    ("tas_bri", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=91&sensor_id=168"),
    ("tas_veg", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=92&sensor_id=168"),
    ("tas_wet", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=93&sensor_id=168"),
    ("t_ndvi", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=202&sensor_id=168"),
    ("tvi", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=98&sensor_id=168"),
    ("varigreen", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=356&sensor_id=168"),
    ("wdrvi", "https://www.indexdatabase.de/db/si-single.php?rsindex_id=125&sensor_id=168"),
    ("ndbi", "https://www.linkedin.com/pulse/ndvi-ndbi-ndwi-calculation-using-landsat-7-8-tek-bahadur-kshetri"),
    ("bu", "https://www.linkedin.com/pulse/ndvi-ndbi-ndwi-calculation-using-landsat-7-8-tek-bahadur-kshetri"),
    ("mndwi", "https://www.linkedin.com/pulse/ndvi-ndbi-ndwi-calculation-using-landsat-7-8-tek-bahadur-kshetri"),
];

/// Source of the formula behind the index called `name`.
pub fn reference(name: &str) -> Option<&'static str> {
    REFERENCES
        .iter()
        .find(|(index, _)| *index == name)
        .map(|(_, url)| *url)
}
