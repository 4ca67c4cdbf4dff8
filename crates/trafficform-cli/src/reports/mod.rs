mod tables;

pub use self::tables::{payload as print_payload, profiles as print_profiles};

use trafficform_core::validator::ValidationResult;

pub fn print_validation(result: &ValidationResult) {
    if result.is_valid() {
        println!("✅ Valid");
        return;
    }
    println!("❌ {} problem(s):", result.messages().len());
    for msg in result.messages() {
        println!("   - {}", msg);
    }
}
