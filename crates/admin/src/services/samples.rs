//! Sample wig catalog used to seed an empty store.

use rust_decimal::Decimal;

use super::products::ProductInput;

struct Sample {
    name: &'static str,
    category: &'static str,
    product_type: &'static str,
    cents: i64,
    stock: u32,
    description: &'static str,
}

const SAMPLES: &[Sample] = &[
    Sample {
        name: "Brazilian Body Wave",
        category: "Human Hair",
        product_type: "Lace Front",
        cents: 8999,
        stock: 15,
        description: "Soft body wave texture with a natural hairline, 18 inches.",
    },
    Sample {
        name: "Silky Straight Bob",
        category: "Human Hair",
        product_type: "Full Lace",
        cents: 12999,
        stock: 8,
        description: "Sleek chin-length bob with pre-plucked full lace.",
    },
    Sample {
        name: "Kinky Curly Afro",
        category: "Synthetic",
        product_type: "Capless",
        cents: 4599,
        stock: 20,
        description: "Voluminous heat-resistant curls, lightweight cap.",
    },
    Sample {
        name: "Deep Wave Closure",
        category: "Human Hair",
        product_type: "Closure",
        cents: 6999,
        stock: 4,
        description: "4x4 closure unit with defined deep waves.",
    },
    Sample {
        name: "Honey Blonde Highlight",
        category: "Human Hair",
        product_type: "Lace Front",
        cents: 15999,
        stock: 6,
        description: "Dimensional highlights on a 22 inch straight base.",
    },
    Sample {
        name: "Pixie Cut Bang",
        category: "Synthetic",
        product_type: "Capless",
        cents: 3499,
        stock: 3,
        description: "Short tapered pixie with side-swept bangs.",
    },
    Sample {
        name: "Loose Wave Ponytail",
        category: "Synthetic",
        product_type: "Clip-in",
        cents: 2999,
        stock: 25,
        description: "Drawstring ponytail with loose waves, 24 inches.",
    },
    Sample {
        name: "Water Wave Headband Wig",
        category: "Human Hair",
        product_type: "Headband",
        cents: 9999,
        stock: 10,
        description: "Glueless headband wig with water wave pattern.",
    },
];

/// The sample catalog as product inputs.
#[must_use]
pub fn sample_products() -> Vec<ProductInput> {
    SAMPLES
        .iter()
        .map(|sample| ProductInput {
            name: sample.name.to_owned(),
            category: sample.category.to_owned(),
            product_type: sample.product_type.to_owned(),
            price: Decimal::new(sample.cents, 2),
            stock: sample.stock,
            description: sample.description.to_owned(),
            active: true,
            image: None,
        })
        .collect()
}
