//! Expansion of a queried name into the absolute names to try.

use ferrous_lookup_domain::DomainError;
use hickory_proto::rr::Name;
use std::str::FromStr;

/// Returns the absolute names to query for `name`, in order.
///
/// An absolute name, or any name when `absolute` is set, yields a single
/// candidate. A relative name is combined with each search suffix; it is
/// tried as-is first when it has more than `ndots` labels and last otherwise.
pub fn candidate_names(
    name: &str,
    absolute: bool,
    search: &[Name],
    ndots: usize,
) -> Result<Vec<Name>, DomainError> {
    let parsed = Name::from_str(name)
        .map_err(|e| DomainError::InvalidDomainName(format!("{}: {}", name, e)))?;

    let mut as_is = parsed.clone();
    as_is.set_fqdn(true);

    if absolute || parsed.is_fqdn() {
        return Ok(vec![as_is]);
    }

    let suffixed = search.iter().filter_map(|suffix| {
        let mut joined = parsed.clone().append_domain(suffix).ok()?;
        joined.set_fqdn(true);
        Some(joined)
    });

    let mut candidates = Vec::with_capacity(search.len() + 1);
    if usize::from(parsed.num_labels()) > ndots {
        candidates.push(as_is);
        candidates.extend(suffixed);
    } else {
        candidates.extend(suffixed);
        candidates.push(as_is);
    }
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suffixes(list: &[&str]) -> Vec<Name> {
        list.iter().map(|s| Name::from_str(s).unwrap()).collect()
    }

    fn render(names: Vec<Name>) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_trailing_dot_is_single_candidate() {
        let search = suffixes(&["corp.example."]);
        let names = candidate_names("www.example.com.", false, &search, 1).unwrap();
        assert_eq!(render(names), vec!["www.example.com."]);
    }

    #[test]
    fn test_absolute_flag_skips_search() {
        let search = suffixes(&["corp.example."]);
        let names = candidate_names("www", true, &search, 1).unwrap();
        assert_eq!(render(names), vec!["www."]);
    }

    #[test]
    fn test_short_name_tries_search_first() {
        let search = suffixes(&["corp.example.", "example.net."]);
        let names = candidate_names("www", false, &search, 1).unwrap();
        assert_eq!(
            render(names),
            vec!["www.corp.example.", "www.example.net.", "www."]
        );
    }

    #[test]
    fn test_dotted_name_tried_as_is_first() {
        let search = suffixes(&["corp.example."]);
        let names = candidate_names("www.example", false, &search, 1).unwrap();
        assert_eq!(render(names), vec!["www.example.", "www.example.corp.example."]);
    }

    #[test]
    fn test_ndots_threshold() {
        let search = suffixes(&["corp.example."]);
        let names = candidate_names("www.example", false, &search, 2).unwrap();
        assert_eq!(render(names), vec!["www.example.corp.example.", "www.example."]);
    }

    #[test]
    fn test_no_search_list() {
        let names = candidate_names("host", false, &[], 1).unwrap();
        assert_eq!(render(names), vec!["host."]);
    }
}
