//! QR / Payment-Option Rendering Contract
//!
//! The order-creation response carries both a server-rendered raster QR and
//! the raw QR text payload. The raster wins when present; the text payload
//! is rendered as a QR client-side otherwise; with neither, the UI falls
//! back to pointing the user at the bank-link list.

use crate::api::{QPayInvoice, QPayUrl};

/// Display cap for bank links on the full checkout page
pub const PAGE_BANK_LINK_CAP: usize = 12;
/// Display cap for bank links in the direct-buy modal
pub const MODAL_BANK_LINK_CAP: usize = 10;

/// Textual fallback when the invoice carries neither image nor payload
pub const NO_QR_MESSAGE: &str = "QR код ирээгүй. Банкны холбоосоор төлнө үү.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentQr {
    /// Inline image source, always a fully-qualified `data:` URI
    Image(String),
    /// QR text payload to be rendered client-side
    Code(String),
    Unavailable,
}

/// Picks the QR representation for an invoice. A bare base64 `qr_image` is
/// wrapped as a PNG data URI; an existing `data:` reference passes through.
pub fn payment_qr(invoice: &QPayInvoice) -> PaymentQr {
    let image = invoice.qr_image.trim();
    if !image.is_empty() {
        let src = if image.starts_with("data:") {
            image.to_string()
        } else {
            format!("data:image/png;base64,{image}")
        };
        return PaymentQr::Image(src);
    }

    let code = invoice.qr_code.trim();
    if !code.is_empty() {
        return PaymentQr::Code(code.to_string());
    }

    PaymentQr::Unavailable
}

/// Bank/app deep links in server order, truncated to the display cap.
/// This is a display limit only; the invoice keeps the full list.
pub fn bank_links(invoice: &QPayInvoice, cap: usize) -> &[QPayUrl] {
    &invoice.urls[..invoice.urls.len().min(cap)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(qr_image: &str, qr_code: &str, url_count: usize) -> QPayInvoice {
        QPayInvoice {
            invoice_id: "inv-1".into(),
            qr_code: qr_code.into(),
            qr_image: qr_image.into(),
            urls: (0..url_count)
                .map(|i| QPayUrl {
                    name: format!("Bank {i}"),
                    description: String::new(),
                    logo: String::new(),
                    link: format!("bank{i}://pay"),
                })
                .collect(),
            invoice_status: "NEW".into(),
        }
    }

    #[test]
    fn raster_image_wins_over_text_payload() {
        let qr = payment_qr(&invoice("iVBORw0KGgo=", "0002010102121531", 0));
        assert_eq!(qr, PaymentQr::Image("data:image/png;base64,iVBORw0KGgo=".into()));
    }

    #[test]
    fn data_uri_passes_through_unwrapped() {
        let qr = payment_qr(&invoice("data:image/gif;base64,R0lGOD==", "", 0));
        assert_eq!(qr, PaymentQr::Image("data:image/gif;base64,R0lGOD==".into()));
    }

    #[test]
    fn text_payload_used_when_no_image() {
        let qr = payment_qr(&invoice("  ", "0002010102121531", 0));
        assert_eq!(qr, PaymentQr::Code("0002010102121531".into()));
    }

    #[test]
    fn neither_yields_unavailable() {
        assert_eq!(payment_qr(&invoice("", "", 3)), PaymentQr::Unavailable);
    }

    #[test]
    fn bank_links_truncate_but_preserve_order() {
        let inv = invoice("", "", 15);
        let page = bank_links(&inv, PAGE_BANK_LINK_CAP);
        assert_eq!(page.len(), 12);
        assert_eq!(page[0].name, "Bank 0");
        assert_eq!(page[11].name, "Bank 11");

        let modal = bank_links(&inv, MODAL_BANK_LINK_CAP);
        assert_eq!(modal.len(), 10);

        let short = invoice("", "", 4);
        assert_eq!(bank_links(&short, PAGE_BANK_LINK_CAP).len(), 4);
    }
}
