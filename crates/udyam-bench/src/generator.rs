//! Registration form generator.
//!
//! Produces [`FormRecord`] batches with a realistic mix of proprietorships
//! and PAN-bearing organisations. With `defect_ratio = 0.0` every record
//! is accepted on the [`evaluation_date`](crate::evaluation_date); each
//! injected defect makes exactly one rule fail.
use rand::rngs::StdRng;
use rand::seq::SliceRandom as _;
use rand::{Rng, SeedableRng};
use udyam_core::{DateType, FormRecord, YesNo, verhoeff_generate};

const NAMES: [&str; 8] = [
    "Asha Devi",
    "Ravi Kumar",
    "Meena Iyer",
    "Farhan Sheikh",
    "Gurpreet Kaur",
    "Lakshmi Traders",
    "Konkan Agro Foods",
    "Narmada Textiles",
];

const GSTIN_THRESHOLD: f64 = 4_000_000.0;

/// Configuration for the form generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of forms to generate.
    pub num_forms: usize,
    /// Fraction of forms that are not proprietorships (0.0-1.0).
    pub company_ratio: f64,
    /// Fraction of forms carrying one injected defect (0.0-1.0).
    pub defect_ratio: f64,
}

/// Predefined batch sizes for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 100 forms
    Small,
    /// 1 000 forms
    Medium,
    /// 10 000 forms
    Large,
}

impl SizeTier {
    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let num_forms = match self {
            SizeTier::Small => 100,
            SizeTier::Medium => 1_000,
            SizeTier::Large => 10_000,
        };
        GeneratorConfig {
            seed,
            num_forms,
            company_ratio: 0.4,
            defect_ratio: 0.2,
        }
    }
}

/// Generates `config.num_forms` records.
pub fn generate_forms(config: &GeneratorConfig) -> Vec<FormRecord> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    (0..config.num_forms)
        .map(|_| {
            let mut record = if rng.gen_bool(config.company_ratio.clamp(0.0, 1.0)) {
                organisation(&mut rng)
            } else {
                proprietor(&mut rng)
            };
            if rng.gen_bool(config.defect_ratio.clamp(0.0, 1.0)) {
                inject_defect(&mut rng, &mut record);
            }
            record
        })
        .collect()
}

/// A valid 12-digit Aadhaar number: leading digit 2-9, Verhoeff check digit.
pub fn aadhaar(rng: &mut impl Rng) -> String {
    let mut data = String::with_capacity(12);
    data.push(char::from(b'0' + rng.gen_range(2..=9u8)));
    for _ in 0..10 {
        data.push(char::from(b'0' + rng.gen_range(0..=9u8)));
    }
    let check = verhoeff_generate(&data).unwrap_or(0);
    data.push(char::from(b'0' + check));
    data
}

/// A PAN of the shape `AAAAA9999A`.
pub fn pan(rng: &mut impl Rng) -> String {
    let mut s = String::with_capacity(10);
    for i in 0..10 {
        let c = if (5..9).contains(&i) {
            b'0' + rng.gen_range(0..=9u8)
        } else {
            b'A' + rng.gen_range(0..26u8)
        };
        s.push(char::from(c));
    }
    s
}

fn form_date(rng: &mut impl Rng) -> String {
    format!(
        "{:02}/{:02}/{}",
        rng.gen_range(1..=28),
        rng.gen_range(1..=12),
        rng.gen_range(1950..=2020)
    )
}

fn name(rng: &mut impl Rng) -> String {
    NAMES.choose(rng).copied().unwrap_or("Asha Devi").to_owned()
}

/// Turnover and GSTIN answers that satisfy the GSTIN rule.
fn turnover(rng: &mut impl Rng) -> (Option<YesNo>, Option<f64>, Option<f64>) {
    let a = f64::from(rng.gen_range(0..10_000_000u32));
    let b = f64::from(rng.gen_range(0..1_000_000u32));
    let has_gstin = if a > GSTIN_THRESHOLD || rng.gen_bool(0.5) {
        YesNo::Yes
    } else {
        YesNo::No
    };
    (Some(has_gstin), Some(a), Some(b))
}

fn proprietor(rng: &mut StdRng) -> FormRecord {
    let (has_gstin, a, b) = turnover(rng);
    FormRecord {
        aadhaar_number: aadhaar(rng),
        owner_name: name(rng),
        aadhaar_declaration: true,
        organization_type: "1".to_owned(),
        has_pan: YesNo::No,
        pan: None,
        pan_name: None,
        dob: None,
        dob_type: None,
        pan_declaration: None,
        has_gstin,
        total_turnover_a: a,
        total_turnover_b: b,
    }
}

fn organisation(rng: &mut StdRng) -> FormRecord {
    let (has_gstin, a, b) = turnover(rng);
    FormRecord {
        aadhaar_number: aadhaar(rng),
        owner_name: name(rng),
        aadhaar_declaration: true,
        organization_type: rng.gen_range(2..=11).to_string(),
        has_pan: YesNo::Yes,
        pan: Some(pan(rng)),
        pan_name: Some(name(rng)),
        dob: Some(form_date(rng)),
        dob_type: Some(DateType::Doi),
        pan_declaration: Some(true),
        has_gstin,
        total_turnover_a: a,
        total_turnover_b: b,
    }
}

/// Breaks exactly one rule of an otherwise valid record.
fn inject_defect(rng: &mut StdRng, record: &mut FormRecord) {
    match rng.gen_range(0..5) {
        0 => {
            // Any other final digit fails the check.
            let mut digits: Vec<u8> = record.aadhaar_number.bytes().collect();
            if let Some(last) = digits.last_mut() {
                *last = b'0' + (*last - b'0' + 1) % 10;
            }
            record.aadhaar_number = String::from_utf8(digits).unwrap_or_default();
        }
        1 => record.owner_name = String::new(),
        2 => record.aadhaar_declaration = false,
        3 => record.organization_type = "0".to_owned(),
        _ => record.total_turnover_b = Some(-1.0),
    }
}
