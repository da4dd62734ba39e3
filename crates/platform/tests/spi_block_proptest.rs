//! Property-based tests for SPI pixel streaming.
//! Verifies chunking and byte order hold for ALL block lengths.

use embedded_hal_mock::eh1::digital::{
    Mock as PinMock, State as PinState, Transaction as PinTransaction,
};
use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};
use platform::spi::BLOCK_CHUNK_PIXELS;
use platform::{DisplayInterface, SpiInterface};

fn expected_transactions(pixels: &[u16]) -> Vec<SpiTransaction<u8>> {
    pixels
        .chunks(BLOCK_CHUNK_PIXELS)
        .flat_map(|chunk| {
            let bytes: Vec<u8> = chunk.iter().flat_map(|p| p.to_be_bytes()).collect();
            [
                SpiTransaction::transaction_start(),
                SpiTransaction::write_vec(bytes),
                SpiTransaction::transaction_end(),
            ]
        })
        .collect()
}

proptest::proptest! {
    /// Every pixel reaches the bus exactly once, high byte first, in order.
    #[test]
    fn block_bytes_are_big_endian_and_ordered(
        pixels in proptest::collection::vec(proptest::num::u16::ANY, 1..200)
    ) {
        let spi = SpiMock::new(&expected_transactions(&pixels));
        let dc = PinMock::new(&[PinTransaction::set(PinState::High)]);
        let mut iface = SpiInterface::new(spi, dc);

        assert!(iface.write_block(&pixels).is_ok());

        let (mut spi, mut dc) = iface.release();
        spi.done();
        dc.done();
    }
}
