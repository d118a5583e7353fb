use crate::token::{is_arg, Token};
use crate::{Definition, HashSet, String, Vec};

// values following the flag at `i`, up to the next flag
fn many_values(i: usize, tokens: &[&str]) -> Vec<String> {
    tokens[i + 1..]
        .iter()
        .take_while(|token| !is_arg(token))
        .map(|&token| String::from(token))
        .collect()
}

pub(crate) fn match_args(tokens: &[&str], args: &mut [Definition<'_>]) {
    if tokens.is_empty() || args.is_empty() {
        debug!("nothing to match");
        return;
    }
    // indices of args which already ran during this scan
    let mut triggered = HashSet::with_capacity(args.len());
    for (i, &token) in tokens.iter().enumerate() {
        let token = Token::classify(token);
        if !token.is_flag() {
            continue;
        }
        let name = token.name();
        debug!("found arg {:?}", token);
        for (j, arg) in args.iter_mut().enumerate() {
            if !arg.matches(name) {
                continue;
            }
            if triggered.contains(&j) {
                debug!("{} already handled, ignoring", arg.full);
                continue;
            }
            if let Some(value) = token.inline_value() {
                debug!("found single value {:?} for {}", value, arg.full);
                let mut values = Vec::with_capacity(1);
                values.push(String::from(value));
                (arg.callback)(values);
                triggered.insert(j);
                break;
            }
            let values = many_values(i, tokens);
            debug!("found values {:?} for {}", values, arg.full);
            (arg.callback)(values);
            triggered.insert(j);
        }
    }
}
