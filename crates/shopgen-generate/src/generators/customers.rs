use rand::Rng;

use shopgen_core::Customer;
use shopgen_core::catalog::{
    AGE_GROUPS, CITIES, FIRST_NAMES, LAST_NAMES, PHONE_DIGITS, PHONE_PREFIXES,
};

use crate::errors::GenerationError;
use crate::generators::{WeightedPool, pick};

/// Generate customers with ids `1..=count`.
pub fn generate_customers<R: Rng + ?Sized>(
    count: u32,
    rng: &mut R,
) -> Result<Vec<Customer>, GenerationError> {
    let cities = WeightedPool::new(CITIES)?;

    let customers = (1..=count)
        .map(|customer_id| {
            let phone_number = phone_number(rng);
            Customer {
                customer_id,
                first_name: pick(FIRST_NAMES, rng).to_string(),
                last_name: pick(LAST_NAMES, rng).to_string(),
                email: Customer::email_for(customer_id),
                phone_number,
                city: cities.sample(rng).to_string(),
                age_group: pick(AGE_GROUPS, rng).to_string(),
            }
        })
        .collect();

    Ok(customers)
}

fn phone_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut phone = String::with_capacity(2 + PHONE_DIGITS);
    phone.push_str(pick(PHONE_PREFIXES, rng));
    for _ in 0..PHONE_DIGITS {
        phone.push(char::from(b'0' + rng.random_range(0..=9u8)));
    }
    phone
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::stage_rng;

    #[test]
    fn ids_are_contiguous() {
        let mut rng = stage_rng(42, "customers");
        let customers = generate_customers(250, &mut rng).expect("customers");
        assert_eq!(customers.len(), 250);
        for (idx, customer) in customers.iter().enumerate() {
            assert_eq!(customer.customer_id as usize, idx + 1);
            assert_eq!(customer.email, format!("CUST{}@gmail.com", idx + 1));
        }
    }

    #[test]
    fn fields_come_from_pools() {
        let mut rng = stage_rng(3, "customers");
        let customers = generate_customers(100, &mut rng).expect("customers");
        for customer in &customers {
            assert!(FIRST_NAMES.contains(&customer.first_name.as_str()));
            assert!(LAST_NAMES.contains(&customer.last_name.as_str()));
            assert!(AGE_GROUPS.contains(&customer.age_group.as_str()));
            assert!(CITIES.iter().any(|(city, _)| *city == customer.city));
        }
    }

    #[test]
    fn phone_numbers_have_prefix_and_eight_digits() {
        let mut rng = stage_rng(9, "customers");
        for customer in generate_customers(50, &mut rng).expect("customers") {
            let phone = &customer.phone_number;
            assert_eq!(phone.len(), 10, "{phone}");
            assert!(PHONE_PREFIXES.contains(&&phone[..2]));
            assert!(phone.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn same_seed_same_customers() {
        let a = generate_customers(20, &mut stage_rng(5, "customers")).expect("a");
        let b = generate_customers(20, &mut stage_rng(5, "customers")).expect("b");
        assert_eq!(a, b);
    }
}
