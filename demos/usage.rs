use errtrail::{raise, trail, Result};

fn checked(x: i32) -> Result<i32> {
    if x < 0 {
        return raise!("Error: x is negative").into();
    }
    println!("x = {}", x);
    Result::new(x)
}

fn counted(x: i32) -> Result<i32> {
    let y = trail!(checked(x));

    // Won't reach this part of the code if x is negative.
    for i in 0..y.min(3) {
        println!("{}", i);
    }

    Result::new(y)
}

fn main() -> Result<()> {
    let good = counted(15);
    println!("data: {}", good.data());

    let bad = counted(-15);
    if let Some(message) = bad.error() {
        println!("error:\n{}", message);
    }

    // Returning an error from `main` prints the trail and exits with failure.
    trail!(counted(-1));
    Result::new(())
}
