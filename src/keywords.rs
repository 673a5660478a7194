//! Keyword normalization and headline filtering.
//!
//! Matching is a case-insensitive substring test: a headline is kept when any
//! normalized keyword appears inside the normalized headline. Stored headlines
//! are never normalized, only compared in normalized form.

use crate::models::ArticleCollection;

/// Keywords used when none are configured.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "ocean",
    "polar",
    "electric",
    "nature",
    "iceberg",
    "biodiversity",
    "green",
    "warm",
    "biology",
    "plant",
    "living",
    "carbon",
    "coronavirus",
    "abatement",
    "acid",
    "air pollution",
    "air quality",
    "algae",
    "algal blooms",
    "alternative energy sources",
    "amenities",
    "atmosphere",
    "backyard burning",
    "ber",
    "biodegradable waste",
    "bioenergy",
    "biofuels",
    "biomass",
    "biosphere",
    "black bin (grey bin)",
    "bring bank",
    "brown bin",
    "bye-law",
    "carpooling",
    "cfcs",
    "cfl bulbs",
    "civic amenity site",
    "climate",
    "climate change",
    "compost",
    "compostable",
    "composting",
    "conservation",
    "cryptosporidium",
    "deforestation",
    "development plan",
    "dioxins",
    "disposal",
    "domestic charges",
    "domestic waste",
    "draught proofing",
    "dumping",
    "ecosystem",
    "ecotourism",
    "effluent",
    "electric vehicle",
    "emissions",
    "emissions projections",
    "emssions trading allowance",
    "end-of-life vehicle",
    "energy efficiency",
    "energy rating",
    "energy star",
    "environmental impact statement",
    "flora and fauna",
    "fossil fuels",
    "fuel poverty",
    "global warming",
    "green bin",
    "green design",
    "greener homes scheme",
    "greenhouse effect",
    "greenhouse gases",
    "ground water",
    "habitat",
    "hazardous waste",
    "home energy saving scheme",
    "household waste",
    "incinerator",
    "insulation",
    "kyoto protocol",
    "kyoto agreement",
    "landfill",
    "litter",
    "mbt",
    "mulch",
    "municipal waste",
    "noise pollution",
    "npws",
    "nss",
    "noxious gases",
    "oil spill",
    "organic food",
    "organic",
    "organism",
    "ozone layer",
    "particulate matter",
    "pay by weight",
    "pesticides",
    "permits",
    "planning permission",
    "plastic bag levy",
    "post-consumer waste",
    "radiation",
    "radioactive",
    "radon",
    "recycle",
    "reforestation",
    "refuse",
    "renewable",
    "reuse",
    "river basin",
    "sewage",
    "smog",
    "smokeless fuel",
    "solar panel",
    "standing charges",
    "surface water",
    "sustainable",
    "toxic",
    "toxin",
    "traffic calming",
    "traffic management",
    "tidy towns",
    "utility",
    "un framework convention on climate change",
    "unesco world heritage site",
    "ventilation",
    "warmer homes scheme",
    "waste management",
    "waste prevention",
    "water vapour",
    "weee",
    "wind energy",
    "wind turbine",
    "zero emissions",
];

/// Canonical form used for keyword comparison. Currently lowercase only.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
}

/// Keep the articles whose headline contains at least one keyword.
///
/// Headlines and keywords are compared in [`normalize`]d form; the returned
/// collection holds the original headlines and links. No keywords means
/// nothing is kept.
pub fn filter_for_keywords<K: AsRef<str>>(
    articles: &ArticleCollection,
    keywords: &[K],
) -> ArticleCollection {
    let keywords: Vec<String> = keywords.iter().map(|k| normalize(k.as_ref())).collect();

    articles
        .iter()
        .filter(|(headline, _)| {
            let headline = normalize(headline);
            keywords.iter().any(|k| headline.contains(k.as_str()))
        })
        .map(|(headline, link)| (headline.clone(), link.clone()))
        .collect()
}
