// Copyright (C) 2026 Launchpad Developers
// SPDX-License-Identifier: GPL-3.0-or-later

//! Display helpers for decoded launchpad values.

use crate::types::U256;

/// Decimals of EGLD and most ESDT payment tokens.
pub const DEFAULT_DECIMALS: usize = 18;

pub const IPFS_GATEWAY: &str = "https://ipfs.io/ipfs";

/// Format a smallest-unit amount as a decimal string with `precision`
/// fractional digits, rounding half up.
///
/// `format_token_amount(500000000000000000, 18, 2)` is `"0.50"`.
pub fn format_token_amount(amount: U256, decimals: usize, precision: usize) -> String {
    // 10^77 is the largest power of ten that fits in 256 bits
    let decimals = decimals.min(77);
    let precision = precision.min(decimals);

    let divisor = U256::exp10(decimals - precision);
    let scaled = amount.saturating_add(divisor / 2) / divisor;

    if precision == 0 {
        return scaled.to_string();
    }

    let unit = U256::exp10(precision);
    let whole = scaled / unit;
    let fraction = (scaled % unit).to_string();
    format!("{whole}.{fraction:0>precision$}")
}

/// Royalties are stored as percent times 100.
pub fn royalties_percent(royalties: u64) -> String {
    format!("{}.{:02}%", royalties / 100, royalties % 100)
}

pub fn progress_percent(minted: u64, max_supply: u64) -> f64 {
    if max_supply == 0 {
        return 0.0;
    }
    (minted as f64 / max_supply as f64) * 100.0
}

/// `WEGLD-bd4d79` becomes `WEGLD`. Identifiers without a nonce suffix are
/// returned unchanged.
pub fn token_ticker(identifier: &str) -> &str {
    identifier.split('-').next().unwrap_or(identifier)
}

/// Public gateway URL of the `index`-th asset of a collection.
pub fn ipfs_asset_url(cid: &str, index: u64, extension: &str) -> String {
    let extension = extension.trim_start_matches('.');
    format!("{IPFS_GATEWAY}/{cid}/{index}.{extension}")
}

/// Tags are free text on chain; collections use both `;` and `,`.
pub fn split_tags(tags: &str) -> Vec<String> {
    tags.split([';', ','])
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_token_amount() {
        let half = U256::from(500_000_000_000_000_000u64);
        assert_eq!(format_token_amount(half, DEFAULT_DECIMALS, 2), "0.50");
        assert_eq!(format_token_amount(U256::zero(), DEFAULT_DECIMALS, 2), "0.00");
        assert_eq!(
            format_token_amount(U256::from(1_234_560_000_000_000_000u64), DEFAULT_DECIMALS, 4),
            "1.2346"
        );
        assert_eq!(format_token_amount(U256::from(2_000_000u64), 6, 0), "2");
    }

    #[test]
    fn test_format_token_amount_rounds_half_up() {
        assert_eq!(format_token_amount(U256::from(5u64), 3, 2), "0.01");
        assert_eq!(format_token_amount(U256::from(4u64), 3, 2), "0.00");
    }

    #[test]
    fn test_format_token_amount_large_value() {
        let amount = U256::from_dec_str("123456789000000000000000000000").unwrap();
        assert_eq!(format_token_amount(amount, DEFAULT_DECIMALS, 2), "123456789000.00");
    }

    #[test]
    fn test_precision_above_decimals_is_capped() {
        assert_eq!(format_token_amount(U256::from(15u64), 1, 4), "1.5");
    }

    #[test]
    fn test_royalties_percent() {
        assert_eq!(royalties_percent(500), "5.00%");
        assert_eq!(royalties_percent(1250), "12.50%");
        assert_eq!(royalties_percent(7), "0.07%");
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(250, 1000), 25.0);
        assert_eq!(progress_percent(3, 0), 0.0);
        assert_eq!(progress_percent(10, 10), 100.0);
    }

    #[test]
    fn test_token_ticker() {
        assert_eq!(token_ticker("WEGLD-bd4d79"), "WEGLD");
        assert_eq!(token_ticker("EGLD"), "EGLD");
    }

    #[test]
    fn test_ipfs_asset_url() {
        assert_eq!(
            ipfs_asset_url("bafyabc", 7, ".png"),
            "https://ipfs.io/ipfs/bafyabc/7.png"
        );
    }

    #[test]
    fn test_split_tags() {
        assert_eq!(split_tags("art; pixel,gaming"), vec!["art", "pixel", "gaming"]);
        assert_eq!(split_tags(" ;, "), Vec::<String>::new());
        assert!(split_tags("").is_empty());
    }
}
