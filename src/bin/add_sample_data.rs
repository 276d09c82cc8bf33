//! Sample data loader
//!
//! Thin CLI that health-checks a running cafe server and POSTs a sample
//! menu through the public API.
//!
//! ```text
//! API_BASE=http://localhost:8000 cargo run --bin add_sample_data
//! ```

use serde_json::{Value, json};

fn sample_menu() -> Vec<Value> {
    vec![
        json!({"name": "Espresso", "description": "Rich and bold espresso shot", "price": 2.50, "image_url": "https://example.com/espresso.jpg"}),
        json!({"name": "Cappuccino", "description": "Espresso with steamed milk and foam", "price": 4.00, "image_url": "https://example.com/cappuccino.jpg"}),
        json!({"name": "Latte", "description": "Espresso with steamed milk", "price": 4.50, "image_url": "https://example.com/latte.jpg"}),
        json!({"name": "Americano", "description": "Espresso with hot water", "price": 3.00, "image_url": "https://example.com/americano.jpg"}),
        json!({"name": "Mocha", "description": "Espresso with chocolate and steamed milk", "price": 5.00, "image_url": "https://example.com/mocha.jpg"}),
        json!({"name": "Croissant", "description": "Buttery, flaky pastry", "price": 3.50, "image_url": "https://example.com/croissant.jpg"}),
        json!({"name": "Blueberry Muffin", "description": "Fresh baked muffin with blueberries", "price": 4.00, "image_url": "https://example.com/muffin.jpg"}),
        json!({"name": "Avocado Toast", "description": "Toasted bread with fresh avocado", "price": 8.00, "image_url": "https://example.com/avocado-toast.jpg"}),
        json!({"name": "Caesar Salad", "description": "Fresh romaine with caesar dressing", "price": 9.50, "image_url": "https://example.com/caesar-salad.jpg"}),
        json!({"name": "Grilled Sandwich", "description": "Grilled cheese and ham sandwich", "price": 7.50, "image_url": "https://example.com/sandwich.jpg"}),
        json!({"name": "Bagel with Cream Cheese", "description": "Fresh bagel with cream cheese", "price": 4.50, "image_url": "https://example.com/bagel.jpg"}),
        json!({"name": "Fruit Bowl", "description": "Mixed seasonal fruits", "price": 6.00, "image_url": "https://example.com/fruit-bowl.jpg"}),
        json!({"name": "Green Tea", "description": "Premium green tea", "price": 2.50, "image_url": "https://example.com/green-tea.jpg"}),
        json!({"name": "Hot Chocolate", "description": "Rich hot chocolate with marshmallows", "price": 4.00, "image_url": "https://example.com/hot-chocolate.jpg"}),
        json!({"name": "Iced Coffee", "description": "Cold brew coffee over ice", "price": 3.50, "image_url": "https://example.com/iced-coffee.jpg"}),
    ]
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base = std::env::var("API_BASE").unwrap_or_else(|_| "http://localhost:8000".into());
    let client = reqwest::Client::new();

    println!("Cafe API sample data loader");

    // Check the API is up before loading anything
    let health = client.get(format!("{base}/health")).send().await;
    match health {
        Ok(resp) if resp.status().is_success() => println!("API is healthy"),
        Ok(resp) => {
            eprintln!("API returned status: {}", resp.status());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Cannot connect to API at {base}: {e}");
            std::process::exit(1);
        }
    }

    println!("Adding sample menu items...");
    for item in sample_menu() {
        let name = item["name"].as_str().unwrap_or("?").to_string();
        let resp = client
            .post(format!("{base}/menu"))
            .json(&item)
            .send()
            .await;
        match resp {
            Ok(resp) if resp.status().is_success() => println!("  added: {name}"),
            Ok(resp) => eprintln!("  failed to add {name}: {}", resp.status()),
            Err(e) => eprintln!("  error adding {name}: {e}"),
        }
    }

    println!("Sample data loading complete");
    Ok(())
}
