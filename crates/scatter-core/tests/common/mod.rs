// File: crates/scatter-core/tests/common/mod.rs
// Purpose: Shared fixtures for integration tests.

#![allow(dead_code)]

use scatter_core::{Dataset, Record};

pub const SAMPLE_CSV: &str = "\
id,state,abbr,poverty,povertyMoe,age,ageMoe,income,incomeMoe,healthcare,obesity,smokes
1,Alabama,AL,18.7,0.7,38,0.2,43200,542,13,32.8,21
2,Alaska,AK,11.4,0.7,33.3,0.3,70898,1186,15,29.8,19.9
4,Arizona,AZ,17.4,0.4,36.9,0.1,51340,409,14.4,26.4,16.5
5,Arkansas,AR,18.9,0.7,37.6,0.2,41307,483,14.4,35.1,24.7
6,California,CA,16.4,0.2,36,0.1,62009,217,14.9,24.2,12.9
";

pub fn sample() -> Dataset {
    Dataset::from_reader(SAMPLE_CSV.as_bytes()).expect("sample csv parses")
}

pub fn alabama() -> Dataset {
    Dataset::new(vec![Record {
        state: "Alabama".into(),
        abbr: "AL".into(),
        poverty: 18.7,
        age: 38.0,
        income: 43200.0,
        obesity: 32.8,
        smokes: 21.0,
        healthcare: 13.0,
    }])
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
