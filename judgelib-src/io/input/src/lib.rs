use std::any::type_name;
use std::fmt::Debug;
use std::io::{BufRead, BufReader, Stdin};
use std::iter::Peekable;
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::{Mutex, OnceLock};

pub static STDIN_SOURCE: OnceLock<Mutex<AutoSource<BufReader<Stdin>>>> =
    OnceLock::new();

pub trait Source<R: BufRead> {
    fn next_token(&mut self) -> Option<String>;
    fn is_empty(&mut self) -> bool;
    fn next_token_unwrap(&mut self) -> String {
        match self.next_token() {
            Some(token) => token,
            None => panic!("unexpected end of input"),
        }
    }
}

impl<R: BufRead, S: Source<R>> Source<R> for &'_ mut S {
    fn next_token(&mut self) -> Option<String> { (*self).next_token() }
    fn is_empty(&mut self) -> bool { (*self).is_empty() }
}

pub type AutoSource<R> = OnceSource<R>;

/// Reads everything up front and hands out whitespace-separated tokens.
pub struct OnceSource<R: BufRead> {
    tokens: Peekable<std::vec::IntoIter<String>>,
    _phantom: PhantomData<R>,
}

impl<R: BufRead> OnceSource<R> {
    pub fn new(mut source: R) -> Self {
        let mut context = "".to_owned();
        if let Err(e) = source.read_to_string(&mut context) {
            panic!("failed to read input: {e}");
        }
        let tokens: Vec<_> =
            context.split_whitespace().map(|s| s.to_owned()).collect();
        Self {
            tokens: tokens.into_iter().peekable(),
            _phantom: PhantomData,
        }
    }
}

impl<R: BufRead> Source<R> for OnceSource<R> {
    fn next_token(&mut self) -> Option<String> { self.tokens.next() }
    fn is_empty(&mut self) -> bool { self.tokens.peek().is_none() }
}

impl<'a> From<&'a str> for OnceSource<BufReader<&'a [u8]>> {
    fn from(s: &'a str) -> Self {
        OnceSource::new(BufReader::new(s.as_bytes()))
    }
}

pub trait Readable {
    type Output;
    fn read<R: BufRead, S: Source<R>>(source: &mut S) -> Self::Output;
}

impl<T: FromStr> Readable for T
where
    T::Err: Debug,
{
    type Output = T;
    fn read<R: BufRead, S: Source<R>>(source: &mut S) -> T {
        let token = source.next_token_unwrap();
        match token.parse() {
            Ok(v) => v,
            Err(e) => panic!(
                "`{input}` `{ty}` `{err:?}`",
                input = token,
                ty = type_name::<T>(),
                err = e
            ),
        }
    }
}

pub mod marker {
    use std::io::BufRead;

    use super::{Readable, Source};

    /// A 1-based index, read as 0-based.
    pub enum Usize1 {}

    impl Readable for Usize1 {
        type Output = usize;
        fn read<R: BufRead, S: Source<R>>(source: &mut S) -> usize {
            match usize::read(source).checked_sub(1) {
                Some(v) => v,
                None => panic!("`0` is not a 1-based index"),
            }
        }
    }
}

#[macro_export]
macro_rules! scan {
    // terminator
    (@from [$source:expr] @rest) => {};

    // parse mutability
    (@from [$source:expr] @rest mut $($rest:tt)*) => {
        $crate::scan! {
            @from [$source]
            @mut [mut]
            @rest $($rest)*
        }
    };
    (@from [$source:expr] @rest $($rest:tt)*) => {
        $crate::scan! {
            @from [$source]
            @mut []
            @rest $($rest)*
        }
    };

    // parse variable pattern
    (@from [$source:expr] @mut [$($mut:tt)?] @rest $var:tt: $($rest:tt)*) => {
        $crate::scan! {
            @from [$source]
            @mut [$($mut)?]
            @var $var
            @kind []
            @rest $($rest)*
        }
    };

    // parse kind, up to the next top-level comma
    (@from [$source:expr] @mut [$($mut:tt)?] @var $var:tt @kind [$($kind:tt)*] @rest) => {
        let $($mut)? $var = $crate::read_value!(@source [$source] @kind [$($kind)*]);
    };
    (@from [$source:expr] @mut [$($mut:tt)?] @var $var:tt @kind [$($kind:tt)*] @rest, $($rest:tt)*) => {
        $crate::scan!(@from [$source] @mut [$($mut)?] @var $var @kind [$($kind)*] @rest);
        $crate::scan!(@from [$source] @rest $($rest)*);
    };
    (@from [$source:expr] @mut [$($mut:tt)?] @var $var:tt @kind [$($kind:tt)*] @rest $tt:tt $($rest:tt)*) => {
        $crate::scan!(@from [$source] @mut [$($mut)?] @var $var @kind [$($kind)* $tt] @rest $($rest)*);
    };

    (from $source:expr, $($rest:tt)*) => {
        #[allow(unused_variables, unused_mut)]
        let mut s = $source;
        $crate::scan! {
            @from [&mut s]
            @rest $($rest)*
        }
    };
    ($($rest:tt)*) => {
        let mut locked_stdin = $crate::STDIN_SOURCE.get_or_init(|| {
            ::std::sync::Mutex::new($crate::AutoSource::new(::std::io::BufReader::new(::std::io::stdin())))
        }).lock().unwrap();
        $crate::scan! {
            @from [&mut *locked_stdin]
            @rest $($rest)*
        }
        drop(locked_stdin);
    };
}

#[macro_export]
macro_rules! read_value {
    // `[kind; len]`
    (@source [$source:expr] @kind [[$($kind:tt)*]]) => {
        $crate::read_value!(@vec @source [$source] @kind [] @rest $($kind)*)
    };
    (@vec @source [$source:expr] @kind [$($kind:tt)*] @rest ; $($len:tt)+) => {{
        let len: usize = $($len)+;
        (0..len)
            .map(|_| $crate::read_value!(@source [$source] @kind [$($kind)*]))
            .collect::<Vec<_>>()
    }};
    (@vec @source [$source:expr] @kind [$($kind:tt)*] @rest $tt:tt $($rest:tt)*) => {
        $crate::read_value!(@vec @source [$source] @kind [$($kind)* $tt] @rest $($rest)*)
    };

    // `(kind, ...)`
    (@source [$source:expr] @kind [($($kinds:tt)*)]) => {
        $crate::read_value!(@tuple @source [$source] @kinds [] @current [] @rest $($kinds)*)
    };
    (@tuple @source [$source:expr] @kinds [$([$($kind:tt)*])*] @current [] @rest) => {
        (
            $($crate::read_value!(@source [$source] @kind [$($kind)*]),)*
        )
    };
    (@tuple @source [$source:expr] @kinds [$($kinds:tt)*] @current [$($curr:tt)+] @rest) => {
        $crate::read_value!(@tuple @source [$source] @kinds [$($kinds)* [$($curr)+]] @current [] @rest)
    };
    (@tuple @source [$source:expr] @kinds [$($kinds:tt)*] @current [$($curr:tt)*] @rest, $($rest:tt)*) => {
        $crate::read_value!(@tuple @source [$source] @kinds [$($kinds)* [$($curr)*]] @current [] @rest $($rest)*)
    };
    (@tuple @source [$source:expr] @kinds [$($kinds:tt)*] @current [$($curr:tt)*] @rest $tt:tt $($rest:tt)*) => {
        $crate::read_value!(@tuple @source [$source] @kinds [$($kinds)*] @current [$($curr)* $tt] @rest $($rest)*)
    };

    (@source [$source:expr] @kind []) => {
        compile_error!("missing type after `:`")
    };

    (@source [$source:expr] @kind [$kind:ty]) => {
        <$kind as $crate::Readable>::read($source)
    };
}

#[cfg(test)]
mod tests {
    use super::marker::Usize1;
    use super::*;

    #[test]
    fn sanity_check() {
        let src = AutoSource::from("1 2 3 4");
        scan! {
            from src,
            int: u32,
            frac: f64,
            ch: char,
            string: String,
        }
        assert_eq!((int, frac, ch, string), (1, 2.0, '3', "4".to_owned()));

        let src = AutoSource::from("2 3 1 2 3 4 5 6");
        scan! {
            from src,
            (h, w): (usize, usize),
            grid: [[i32; w]; h],
        }
        assert_eq!(grid, [[1, 2, 3], [4, 5, 6]]);

        let src = AutoSource::from("1 2 3 4 5 6 7 8");
        scan! {
            from src,
            a: (i32, i32, (i32, i32), i32),
            (b, c): (i32, i32,),
            mut d: i32,
        }
        d += 1;
        assert_eq!((a, b, c, d), ((1, 2, (3, 4), 5), 6, 7, 9));
    }

    #[test]
    fn one_based() {
        let src = AutoSource::from("3 1 3 2 2");
        scan! {
            from src,
            m: usize,
            pairs: [(Usize1, Usize1); m / 2],
            last: Usize1,
        }
        assert_eq!(m, 3);
        assert_eq!(pairs, [(0, 2)]);
        assert_eq!(last, 1);
    }

    #[test]
    fn until_exhausted() {
        let mut src = AutoSource::from("1\n5\n2\n-1 2\n3 -4\n");
        let mut got = vec![];
        while !src.is_empty() {
            scan! {
                from &mut src,
                n: usize,
                a: [[i32; n]; n],
            }
            got.push(a);
        }
        assert_eq!(got, [vec![vec![5]], vec![vec![-1, 2], vec![3, -4]]]);
        assert_eq!(src.next_token(), None);
    }

    #[test]
    #[should_panic(expected = "1-based")]
    fn zero_index() {
        let src = AutoSource::from("0");
        scan! { from src, _i: Usize1 }
    }

    #[test]
    #[should_panic(expected = "`x`")]
    fn bad_token() {
        let src = AutoSource::from("x");
        scan! { from src, _n: usize }
    }

    #[test]
    #[should_panic(expected = "end of input")]
    fn exhausted() {
        let src = AutoSource::from("1");
        scan! { from src, _a: u8, _b: u8 }
    }
}
