//! Bundled boundary data for the built-in regions.
//!
//! Values and vertex order must match the published boundaries exactly;
//! classification near a boundary depends on both.

use crate::models::{BoundingBox, Coordinate};

/// Taiwan island and the Penghu islands.
///
/// Penghu shares the southern and eastern bounds of the main island box, so
/// the union of the two covers both without a separate strait box.
pub static TAIWAN: &[BoundingBox] = &[
    // island: 21.880644..25.312839 N, 120.018228..122.076781 E
    BoundingBox::new(
        21.88064442633305,
        25.312839377631335,
        120.01822860298347,
        122.07678177800152,
    ),
    // Penghu, western bound 119.310262 E
    BoundingBox::new(
        21.88064442633305,
        23.809750919537784,
        119.31026231360003,
        122.07678177800152,
    ),
];

/// Hong Kong, from State Council Order No. 221 (1 July 1997).
pub static HONG_KONG: &[Coordinate] = &[
    Coordinate::new(22.543669, 114.226347),
    Coordinate::new(22.545950, 114.225667),
    Coordinate::new(22.547850, 114.226919),
    Coordinate::new(22.548008, 114.226906),
    Coordinate::new(22.556525, 114.206736),
    Coordinate::new(22.510064, 113.995056),
    Coordinate::new(22.472358, 113.947806),
    Coordinate::new(22.428806, 113.869111),
    Coordinate::new(22.333333, 113.869111),
    Coordinate::new(22.273111, 113.847239),
    Coordinate::new(22.267722, 113.839000),
    Coordinate::new(22.239278, 113.826389),
    Coordinate::new(22.217056, 113.817111),
    Coordinate::new(22.183861, 113.832389),
    Coordinate::new(22.142528, 113.896556),
    Coordinate::new(22.136722, 113.922389),
    Coordinate::new(22.148472, 113.939556),
    Coordinate::new(22.148472, 114.236000),
    Coordinate::new(22.138556, 114.255167),
    Coordinate::new(22.148472, 114.284000),
    Coordinate::new(22.148472, 114.502444),
    Coordinate::new(22.365139, 114.502444),
    Coordinate::new(22.468722, 114.454889),
    Coordinate::new(22.544972, 114.455139),
    Coordinate::new(22.562000, 114.433972),
    Coordinate::new(22.568333, 114.332972),
    Coordinate::new(22.566667, 114.309083),
    Coordinate::new(22.565500, 114.276028),
    Coordinate::new(22.555722, 114.248667),
    Coordinate::new(22.550722, 114.237056),
    Coordinate::new(22.543667, 114.233639),
];

/// Macao land and sea area, from State Council Order No. 665 (20 December 2015).
pub static MACAO: &[Coordinate] = &[
    // land: Border Gate checkpoint
    Coordinate::new(22.215425, 113.550925),
    Coordinate::new(22.215522, 113.550778),
    Coordinate::new(22.215664, 113.550722),
    Coordinate::new(22.217036, 113.550847),
    Coordinate::new(22.216933, 113.550003),
    Coordinate::new(22.216733, 113.549653),
    Coordinate::new(22.216614, 113.549200),
    Coordinate::new(22.216617, 113.548753),
    Coordinate::new(22.216733, 113.548336),
    Coordinate::new(22.216658, 113.547716),
    Coordinate::new(22.216558, 113.547628),
    // land: Canal dos Patos
    Coordinate::new(22.216781, 113.547039),
    Coordinate::new(22.216783, 113.546567),
    Coordinate::new(22.216797, 113.546506),
    Coordinate::new(22.216811, 113.545478),
    Coordinate::new(22.216922, 113.545189),
    Coordinate::new(22.217031, 113.544356),
    Coordinate::new(22.216314, 113.543391),
    Coordinate::new(22.214433, 113.543019),
    Coordinate::new(22.214286, 113.542964),
    Coordinate::new(22.213694, 113.542569),
    Coordinate::new(22.213672, 113.542511),
    Coordinate::new(22.213233, 113.542295),
    Coordinate::new(22.213325, 113.542090),
    Coordinate::new(22.213086, 113.541998),
    Coordinate::new(22.213022, 113.541736),
    Coordinate::new(22.213036, 113.541456),
    Coordinate::new(22.213642, 113.539258),
    Coordinate::new(22.213636, 113.536333),
    Coordinate::new(22.213558, 113.535706),
    Coordinate::new(22.213475, 113.535439),
    Coordinate::new(22.213492, 113.535292),
    Coordinate::new(22.213525, 113.535167),
    Coordinate::new(22.212306, 113.533083),
    Coordinate::new(22.209644, 113.533969),
    Coordinate::new(22.207367, 113.534653),
    // sea: Inner Harbour
    Coordinate::new(22.206694, 113.535389),
    Coordinate::new(22.202306, 113.535639),
    Coordinate::new(22.194500, 113.533611),
    Coordinate::new(22.188528, 113.529222),
    Coordinate::new(22.188139, 113.530194),
    Coordinate::new(22.186556, 113.529167),
    Coordinate::new(22.184500, 113.528361),
    Coordinate::new(22.182167, 113.528167),
    Coordinate::new(22.177000, 113.529417),
    Coordinate::new(22.175444, 113.530583),
    // sea: Cotai channel
    Coordinate::new(22.173306, 113.531972),
    Coordinate::new(22.172139, 113.532139),
    Coordinate::new(22.157000, 113.539528),
    Coordinate::new(22.150778, 113.545250),
    Coordinate::new(22.145361, 113.549556),
    Coordinate::new(22.115583, 113.548306),
    Coordinate::new(22.108861, 113.549639),
    Coordinate::new(22.098833, 113.570972),
    // sea: southern waters
    Coordinate::new(22.076667, 113.570972),
    Coordinate::new(22.076667, 113.610222),
    // sea: eastern waters
    Coordinate::new(22.115583, 113.630139),
    Coordinate::new(22.165639, 113.630139),
    Coordinate::new(22.204111, 113.604722),
    // sea: border crossing artificial island
    Coordinate::new(22.203958, 113.570944),
    // sea: northern waters
    Coordinate::new(22.209083, 113.568972),
    Coordinate::new(22.212222, 113.562278),
    Coordinate::new(22.215999, 113.552028),
];
