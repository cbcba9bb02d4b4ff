//! Solidity ABI surface targeted by compiled calldata.

use alloy_sol_types::sol;

sol! {
    #![sol(all_derives)]

    /// Cauldron entry points (V1-V4 share these signatures).
    interface ICauldron {
        function cook(uint8[] actions, uint256[] values, bytes[] datas)
            external
            payable
            returns (uint256 value1, uint256 value2);
        function borrow(address to, uint256 amount) external returns (uint256 part, uint256 share);
    }

    interface ISimpleSwap {
        function swap(address recipient, uint256 shareToMin, uint256 shareFrom)
            external
            returns (uint256 extraShare, uint256 shareReturned);
    }
}
