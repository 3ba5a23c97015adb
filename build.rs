fn main() {
    println!("cargo:rerun-if-changed=src/firmware/firmware.ld");
    println!("cargo:rustc-link-arg-bin=uart-ticker=--script=src/firmware/firmware.ld");
}
