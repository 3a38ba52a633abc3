//! Human-readable summary text for a single analyzed image

use crate::io::configuration::{DN_SUMMARY_THRESHOLD, LGLE_SUMMARY_THRESHOLD};

/// Render the per-image feature summary
///
/// Values are printed with fixed 6-decimal precision, followed by one
/// interpretive sentence per feature. The narrative thresholds (0.05 for
/// LGLE, 0.5 for DN) are independent of the classification thresholds.
pub fn render_summary(image_name: &str, lgle: f64, dn: f64) -> String {
    let mut text = format!("GLDM Feature Analysis Summary for Image: {image_name}\n");
    text.push_str("----------------------------------------------\n");
    text.push_str(&format!("Low Gray Level Emphasis (LGLE): {lgle:.6}\n"));
    text.push_str(&format!("Dependence Non-Uniformity (DN): {dn:.6}\n"));
    text.push_str("\nInterpretation:\n");

    if lgle > LGLE_SUMMARY_THRESHOLD {
        text.push_str("- High LGLE indicates a concentration of low-intensity pixels.\n");
    } else {
        text.push_str("- Low LGLE suggests fewer low-gray pixels in the image.\n");
    }

    if dn < DN_SUMMARY_THRESHOLD {
        text.push_str("- Low DN indicates uniform texture and smooth dependencies.\n");
    } else {
        text.push_str("- High DN suggests complex or heterogeneous texture patterns.\n");
    }

    text
}
