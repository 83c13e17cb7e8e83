/// Payload encoded into the QR code handed back to birdie claimants. The
/// admin app scans it to pull the claim up for verification. Hole-in-one
/// claims get no QR; those are verified in person.
pub fn birdie_qr_payload(claim_id: i64, course_id: Option<&str>) -> String {
    format!(
        "par3://claims/{claim_id}?type=birdie&course={}",
        course_id.unwrap_or("unknown")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birdie_qr_payload() {
        assert_eq!(
            birdie_qr_payload(42, Some("wentworth-gc")),
            "par3://claims/42?type=birdie&course=wentworth-gc"
        );
        assert_eq!(
            birdie_qr_payload(7, None),
            "par3://claims/7?type=birdie&course=unknown"
        );
    }
}
