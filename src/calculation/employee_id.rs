//! Employee ID generation.
//!
//! An ID is an uppercase prefix derived from the person's name followed by
//! a random numeric suffix:
//!
//! | tokens | prefix                                                  |
//! |--------|---------------------------------------------------------|
//! | 3+     | first letter of token 1, all of token 2, first letter of the last token |
//! | 2      | first letters of both tokens                            |
//! | 1      | first letter                                            |

use rand::Rng;

use crate::config::EmployeeIdConfig;
use crate::error::EngineResult;
use crate::models::{EmployeeIdentifier, PersonName};

fn initial(token: &str) -> String {
    token
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// Derives the uppercase ID prefix for a name.
///
/// # Example
///
/// ```
/// use hr_document_engine::calculation::derive_id_prefix;
/// use hr_document_engine::models::PersonName;
///
/// let name = PersonName::parse("Asha Kumari Singh").unwrap();
/// assert_eq!(derive_id_prefix(&name), "AKUMARIS");
/// ```
pub fn derive_id_prefix(name: &PersonName) -> String {
    let tokens = name.tokens();
    match tokens.len() {
        0 => String::new(),
        1 => initial(&tokens[0]),
        2 => format!("{}{}", initial(&tokens[0]), initial(&tokens[1])),
        _ => format!(
            "{}{}{}",
            initial(name.first()),
            tokens[1].to_uppercase(),
            initial(name.last())
        ),
    }
}

/// Draws a suffix uniformly from the configured inclusive range.
pub fn random_id_suffix<R: Rng + ?Sized>(range: &EmployeeIdConfig, rng: &mut R) -> u32 {
    rng.gen_range(range.suffix_min..=range.suffix_max)
}

/// Generates an employee ID for a full name.
///
/// Returns `EmptyName` when the name is blank after trimming.
///
/// # Example
///
/// ```
/// use hr_document_engine::calculation::generate_employee_id;
/// use hr_document_engine::config::EmployeeIdConfig;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let id = generate_employee_id("Asha Singh", &EmployeeIdConfig::default(), &mut rng).unwrap();
///
/// assert_eq!(id.prefix, "AS");
/// assert!((1001..=9999).contains(&id.suffix));
/// ```
pub fn generate_employee_id<R: Rng + ?Sized>(
    full_name: &str,
    range: &EmployeeIdConfig,
    rng: &mut R,
) -> EngineResult<EmployeeIdentifier> {
    let name = PersonName::parse(full_name)?;
    Ok(EmployeeIdentifier {
        prefix: derive_id_prefix(&name),
        suffix: random_id_suffix(range, rng),
    })
}
