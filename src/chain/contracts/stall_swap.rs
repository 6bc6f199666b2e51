//! Stall swap contract bindings.
//!
//! The call names only the output token and the recipient; the contract
//! decides which input it takes. The deployed ABI calls the first argument
//! `usdcAmount`, but callers pass the amount scaled by the sold token's own
//! decimals rather than a fixed 10^6.

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface IStallSwap {
        function swap(
            uint256 usdcAmount,
            address _tokenOut,
            address _userWallet
        ) external returns (uint256 wethAmount);
    }
}
