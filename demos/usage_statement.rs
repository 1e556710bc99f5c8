use errtrail::{raise, trail_into, Result};

fn checked(x: i32) -> Result<i32> {
    if x < 0 {
        return raise!("Error: x is negative ({})", x).into();
    }
    Result::new(x)
}

fn halved(x: i32) -> Result<i32> {
    // `trail_into!` assigns into a variable declared beforehand.
    let y: i32;
    trail_into!(y, checked(x));
    Result::new(y / 2)
}

fn main() {
    for x in [16, -16] {
        let result = halved(x);
        if result.is_ok() {
            println!("halved({}) = {}", x, result.data());
        } else {
            println!("halved({}) failed:\n{}", x, result.error().unwrap());
        }
    }
}
