//! The `pipe!` macro for left-to-right function composition.

/// Builds a function that pipes its input through the given functions
/// from left to right.
///
/// `pipe!(f, g, h)` returns a closure computing `h(g(f(x)))`. The
/// composition is built once; calling the result applies every stage
/// eagerly, in order.
///
/// # Syntax
///
/// - `pipe!(f)` - Returns `f` unchanged (a multi-argument `f` keeps
///   its arity)
/// - `pipe!(f, g)` - Returns `|x| g(f(x))`
/// - `pipe!(f, g, h, ...)` - Returns `|x| ...h(g(f(x)))`
///
/// # Type Requirements
///
/// Stages only need to implement [`FnMut`]; the output types may
/// change from stage to stage.
///
/// # Examples
///
/// ## Basic pipeline
///
/// ```
/// use seqtools::pipe;
///
/// fn add_one(value: i32) -> i32 { value + 1 }
/// fn double(value: i32) -> i32 { value * 2 }
///
/// let transform = pipe!(double, add_one);
/// assert_eq!(transform(5), 11); // add_one(double(5))
/// ```
///
/// ## Type conversion through the pipeline
///
/// ```
/// use seqtools::pipe;
///
/// fn to_text(value: i32) -> String { value.to_string() }
/// fn length(text: String) -> usize { text.len() }
///
/// let transform = pipe!(to_text, length);
/// assert_eq!(transform(12345), 5);
/// ```
///
/// ## Single function keeps its arity
///
/// ```
/// use seqtools::pipe;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let same = pipe!(add);
/// assert_eq!(same(2, 3), 5);
/// ```
#[macro_export]
macro_rules! pipe {
    ($function:expr $(,)?) => {
        $function
    };

    ($first:expr, $($remaining:expr),+ $(,)?) => {{
        #[allow(unused_mut)]
        let mut first = $first;
        #[allow(unused_mut)]
        let mut remaining = $crate::pipe!($($remaining),+);
        move |value| remaining(first(value))
    }};
}
