use super::errors::ProductError;

/// Highest discount percentage a product may carry.
pub const MAX_DISCOUNT: f32 = 75.0;
/// Lowest discount percentage a product may carry.
pub const MIN_DISCOUNT: f32 = 0.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Assigned by the store on insert; `None` until the product is persisted.
    pub id: Option<i64>,
    pub name: String,
    pub price: f32,
    pub discount: f32,
    pub store: String,
}

/// Input carried into product creation. Same fields as `Product` minus the id.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCreate {
    pub name: String,
    pub price: f32,
    pub discount: f32,
    pub store: String,
}

impl Product {
    /// Builds an unsaved product, enforcing the discount range.
    pub fn new(props: ProductCreate) -> Result<Self, ProductError> {
        validate_discount(props.discount)?;

        Ok(Self {
            id: None,
            name: props.name,
            price: props.price,
            discount: props.discount,
            store: props.store,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        name: String,
        price: f32,
        discount: f32,
        store: String,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            price,
            discount,
            store,
        }
    }
}

/// Rejects discounts outside `MIN_DISCOUNT..=MAX_DISCOUNT`. NaN is reported as too high.
pub fn validate_discount(discount: f32) -> Result<(), ProductError> {
    if discount < MIN_DISCOUNT {
        return Err(ProductError::DiscountNegative);
    }
    if discount.is_nan() || discount > MAX_DISCOUNT {
        return Err(ProductError::DiscountTooHigh);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn props(discount: f32) -> ProductCreate {
        ProductCreate {
            name: "AirFryer".to_string(),
            price: 1000.0,
            discount,
            store: "ABC TECH".to_string(),
        }
    }

    #[test]
    fn should_accept_discount_on_both_bounds() {
        assert!(Product::new(props(0.0)).is_ok());
        assert!(Product::new(props(75.0)).is_ok());
    }

    #[test]
    fn should_leave_id_unassigned_on_new_product() {
        let product = Product::new(props(10.0)).unwrap();
        assert_eq!(product.id, None);
        assert_eq!(product.name, "AirFryer");
        assert_eq!(product.store, "ABC TECH");
    }

    #[test]
    fn should_reject_negative_discount() {
        let err = Product::new(props(-0.5)).unwrap_err();
        assert_eq!(err, ProductError::DiscountNegative);
    }

    #[test]
    fn should_reject_nan_discount() {
        let err = Product::new(props(f32::NAN)).unwrap_err();
        assert_eq!(err, ProductError::DiscountTooHigh);
    }

    #[test]
    fn should_keep_repository_id() {
        let product =
            Product::from_repository(9, "Ütü".to_string(), 4000.0, 0.0, "ABC TECH".to_string());
        assert_eq!(product.id, Some(9));
    }

    proptest! {
        #[test]
        fn should_accept_any_discount_in_range(discount in 0.0f32..=75.0f32) {
            let product = Product::new(props(discount)).unwrap();
            prop_assert_eq!(product.discount, discount);
        }

        #[test]
        fn should_reject_any_discount_above_limit(
            discount in (75.0f32..1.0e6f32).prop_filter("strictly above limit", |d| *d > 75.0)
        ) {
            let err = Product::new(props(discount)).unwrap_err();
            prop_assert_eq!(err.to_string(), "Product discount can not be higher than 75!");
        }
    }
}
