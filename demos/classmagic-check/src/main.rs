use std::{env, path::PathBuf, process};

use classmagic::{MAGIC_NUMBER, read_class_magic, verify_class_magic};

fn main() {
    env_logger::init();

    let mut args = env::args_os();
    let _ = args.next();
    let Some(input) = args.next() else {
        println!("Usage: classmagic-check <class_file_path>");
        process::exit(1);
    };
    let input = PathBuf::from(input);
    log::debug!("checking {input:?}");

    match verify_class_magic(&input) {
        Ok(true) => println!(
            "Successfully verified magic number for '{}'. It is a valid Java class file.",
            input.display()
        ),
        Ok(false) => println!(
            "Magic number for '{}' is invalid. It is NOT a valid Java class file.",
            input.display()
        ),
        Err(e) => {
            println!(
                "Error verifying magic number for '{}': {e}",
                input.display()
            );
            process::exit(1);
        }
    }

    match read_class_magic(&input) {
        Ok(magic) => {
            println!("Read raw magic number: 0x{magic:X}");
            println!("Expected magic number: 0x{MAGIC_NUMBER:X}");
        }
        Err(e) => println!("Error reading magic number: {e}"),
    }
}
