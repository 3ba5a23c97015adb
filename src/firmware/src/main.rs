#![no_std]
#![no_main]

use core::fmt::Write;
use core::panic::PanicInfo;

use firmware::board::{QemuVirt, TICKER};
use firmware::console::{init_logger, PanicWriter};
use firmware::cprintln;
use firmware::exit::{exit, halt};
use firmware::param::TIMER_PERIOD;
use log::error;
use ticker::{bring_up, Config};

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    let _ = writeln!(PanicWriter, "\nPANIC: {info}");
    halt()
}

#[export_name = "main"]
extern "C" fn main() -> ! {
    // Only fails if a logger is already installed.
    let _ = init_logger();

    let config = Config::new().with_period(TIMER_PERIOD);
    let ticker = match bring_up(&QemuVirt, &TICKER, config) {
        Ok(ticker) => ticker,
        Err(err) => {
            error!("startup failed: {err}");
            exit(err.exit_code())
        }
    };

    cprintln!("Welcome to SiFive!");
    ticker.start();
    ticker.run()
}
