//! 24x32 I²C EEPROM behind the leaderboard store.

use eeprom24x::addr_size::TwoBytes;
use eeprom24x::page_size::B32;
use eeprom24x::unique_serial::No;
use eeprom24x::{Eeprom24x, SlaveAddr, Storage};
use embassy_nrf::peripherals::TWISPI0;
use embassy_nrf::twim::Twim;
use embassy_time::Delay;
use guessbox::config::EEPROM_I2C_ADDR;
use guessbox::LeaderboardStore;

pub type I2cBus = Twim<'static, TWISPI0>;

/// `embedded-storage` view of the EEPROM; handles page splitting and
/// write-cycle polling.
pub type Eeprom = Storage<I2cBus, B32, TwoBytes, No, Delay>;

/// Open the leaderboard on the EEPROM at `EEPROM_I2C_ADDR`.
pub fn open(i2c: I2cBus) -> LeaderboardStore<Eeprom> {
    // Low three address bits are the A2..A0 strap pins.
    let straps = EEPROM_I2C_ADDR & 0b111;
    let address = SlaveAddr::Alternative(
        straps & 0b100 != 0,
        straps & 0b010 != 0,
        straps & 0b001 != 0,
    );
    let eeprom = Eeprom24x::new_24x32(i2c, address);
    LeaderboardStore::new(Storage::new(eeprom, Delay))
}
