//! Built-in sample map and deliveries, used when no files are given.
//!
//! A small grid of streets around a depot, written in the same text formats
//! that `depot_map::load_map` and `depot_map::load_deliveries` read.

pub const MAP: &str = "\
Gayley Avenue
3
34.0600000 -118.4480000 34.0610000 -118.4480000
34.0610000 -118.4480000 34.0620000 -118.4480000
34.0620000 -118.4480000 34.0630000 -118.4480000
Weyburn Avenue
2
34.0610000 -118.4480000 34.0610000 -118.4470000
34.0610000 -118.4470000 34.0610000 -118.4460000
Broxton Avenue
2
34.0600000 -118.4470000 34.0610000 -118.4470000
34.0610000 -118.4470000 34.0620000 -118.4470000
Le Conte Avenue
2
34.0630000 -118.4480000 34.0630000 -118.4470000
34.0630000 -118.4470000 34.0630000 -118.4460000
Tiverton Avenue
2
34.0610000 -118.4460000 34.0620000 -118.4460000
34.0620000 -118.4460000 34.0630000 -118.4460000
";

pub const DELIVERIES: &str = "\
34.0600000 -118.4480000
34.0630000 -118.4460000:Sardines (Tiverton corner)
34.0620000 -118.4470000:Chicken tenders (Broxton)
34.0610000 -118.4470000:B-Plate salmon (Weyburn)
34.0610000 -118.4470000:Iced tea (Weyburn)
";
