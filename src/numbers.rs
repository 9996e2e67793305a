//! Parity filter over numeric slices.

use std::ops::Rem;

/// Returns the even elements of `numbers`, in their original order.
///
/// Works for any numeric type that supports `%` and can be built from a
/// `u8`. For floats, only integral values are even; `NaN` never is.
///
/// # Examples
///
/// ```
/// use fixture_kit::filter_even_numbers;
///
/// assert_eq!(filter_even_numbers(&[1, 2, 3, 4, 5, 6]), vec![2, 4, 6]);
/// ```
pub fn filter_even_numbers<T>(numbers: &[T]) -> Vec<T>
where
    T: Copy + PartialEq + Rem<Output = T> + From<u8>,
{
    let two = T::from(2);
    let zero = T::from(0);
    numbers.iter().copied().filter(|&n| n % two == zero).collect()
}
