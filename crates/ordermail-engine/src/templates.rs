//! Plain-text email templates.
//!
//! Rendering is deterministic string interpolation of order fields; the
//! delivery template additionally takes the processing date so callers (and
//! tests) control the "Delivered on" line.

use chrono::NaiveDate;
use ordermail_core::types::Order;

/// Subject/body pair for the payment-confirmation email.
pub fn payment_confirmation(store: &str, order_id: &str, order: &Order) -> (String, String) {
    let subject = format!("{store} - Payment Confirmation");
    let shipping = order.shipping_address.clone().unwrap_or_default();
    let body = format!(
        "Dear {first},\n\
         \n\
         Thank you for your order with {store}. We have received your payment.\n\
         \n\
         📦 Order ID: {order_id}\n\
         📅 Expected Delivery Date: {delivery}\n\
         💵 Total Amount: ${total}\n\
         \n\
         Order Items:\n\
         {items}\n\
         \n\
         Delivery Address:\n\
         {address}\n\
         {city}, {state} {pincode}\n\
         \n\
         We will notify you once your order is shipped.\n\
         \n\
         Best regards,\n\
         {store} Team",
        first = order.first_name(),
        delivery = delivery_date_display(order),
        total = order.total,
        items = item_lines(order),
        address = shipping.address,
        city = shipping.city,
        state = shipping.state,
        pincode = shipping.pincode,
    );
    (subject, body)
}

/// Subject/body pair for the delivery-confirmation email.
pub fn delivery_confirmation(
    store: &str,
    order_id: &str,
    order: &Order,
    delivered_on: NaiveDate,
) -> (String, String) {
    let subject = format!("{store} - Delivery Confirmation");
    let body = format!(
        "Dear {first},\n\
         \n\
         Your order has been successfully delivered! 🎁\n\
         \n\
         📦 Order ID: {order_id}\n\
         📅 Delivered on: {date}\n\
         \n\
         We hope you enjoy your purchase! Let us know if you have any feedback.\n\
         \n\
         Best regards,\n\
         {store} Team",
        first = order.first_name(),
        date = delivered_on.format("%-d/%-m/%Y"),
    );
    (subject, body)
}

/// Expected delivery date as "day month year", or the placeholder when the
/// order has no date yet.
pub fn delivery_date_display(order: &Order) -> String {
    order
        .delivery_date
        .and_then(|ts| ts.to_utc())
        .map(|dt| dt.format("%-d %B %Y").to_string())
        .unwrap_or_else(|| "To be confirmed".into())
}

/// One line per item, order preserved.
fn item_lines(order: &Order) -> String {
    order
        .items
        .iter()
        .map(|item| format!("- {}x {} (${})", item.quantity, item.name, item.price))
        .collect::<Vec<_>>()
        .join("\n")
}
